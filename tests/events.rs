#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]

//! Integration tests for the events resource.
//!
//! These tests use `httpmock` to mock the Admin API, so they run without network access.

mod count {
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use shopify_client_sdk::event::Events as _;
    use shopify_client_sdk::event::types::EventCountFilter;
    use shopify_client_sdk::filter::Filter;
    use shopify_client_sdk::{Client, Config};

    #[tokio::test]
    async fn count_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/events/count.json")
                .header("X-Shopify-Access-Token", "shpat_token")
                .header_missing("content-type")
                .is_true(|req| req.query_params().is_empty());
            then.status(StatusCode::OK).json_body(json!({ "count": 3 }));
        });

        let count = client.events().count(&Filter::new()).await?;

        assert_eq!(count, 3);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn typed_and_generic_filters_send_the_same_query() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;
        let events = client.events();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/events/count.json")
                .query_param("created_at_min", "2024-01-01T00:00:00Z")
                .query_param("created_at_max", "2024-02-01T00:00:00Z")
                .is_true(|req| req.query_params().len() == 2);
            then.status(StatusCode::OK).json_body(json!({ "count": 12 }));
        });

        let filter = EventCountFilter::builder()
            .created_at_min("2024-01-01T00:00:00Z".parse()?)
            .created_at_max("2024-02-01T00:00:00Z".parse()?)
            .build();

        let typed = events.count_with(&filter).await?;
        let generic = events.count(&Filter::from(&filter)).await?;

        assert_eq!(typed, 12);
        assert_eq!(generic, typed);
        mock.assert_calls(2);

        Ok(())
    }
}

mod get {
    use httpmock::{Method::GET, MockServer};
    use reqwest::{Method, StatusCode};
    use serde_json::json;
    use shopify_client_sdk::error::{Decode, Kind, Status};
    use shopify_client_sdk::event::Events as _;
    use shopify_client_sdk::event::types::Verb;
    use shopify_client_sdk::{Client, Config};

    #[tokio::test]
    async fn get_should_succeed() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/events/677313116.json")
                .query_param("fields", "id,verb,subject_id");
            then.status(StatusCode::OK).json_body(json!({
                "event": {
                    "id": 677_313_116,
                    "subject_id": 921_728_736,
                    "created_at": "2008-01-10T08:00:00-05:00",
                    "subject_type": "Product",
                    "verb": "create",
                    "arguments": ["IPod Touch 8GB"],
                    "body": null,
                    "message": "Product was created: <a href=\"/admin/products/921728736\">IPod Touch 8GB</a>.",
                    "author": "Shopify",
                    "description": "Product was created: IPod Touch 8GB.",
                    "path": "/admin/products/921728736"
                }
            }));
        });

        let event = client
            .events()
            .get(677_313_116, Some("id,verb,subject_id"))
            .await?;

        assert_eq!(event.id, 677_313_116);
        assert_eq!(event.subject_id, Some(921_728_736));
        assert_eq!(event.subject_type.as_deref(), Some("Product"));
        assert_eq!(event.verb, Some(Verb::Create));
        assert_eq!(event.arguments, vec![json!("IPod Touch 8GB")]);
        assert_eq!(
            event.created_at.map(|t| t.to_rfc3339()).as_deref(),
            Some("2008-01-10T13:00:00+00:00")
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn not_found_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/admin/events/1.json");
            then.status(StatusCode::NOT_FOUND)
                .header("X-Request-Id", "b6d4e9d1-8b5c")
                .json_body(json!({ "errors": "Not Found" }));
        });

        let err = client.events().get(1, None).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Status);
        let status = err.downcast_ref::<Status>().unwrap();
        assert_eq!(status.status_code, StatusCode::NOT_FOUND);
        assert_eq!(status.method, Method::GET);
        assert_eq!(status.path, "/admin/events/1.json");
        assert_eq!(status.request_id.as_deref(), Some("b6d4e9d1-8b5c"));
        assert_eq!(status.errors(), vec!["Not Found".to_owned()]);
        assert_eq!(
            status.to_string(),
            r#"error(404 Not Found) making GET call to /admin/events/1.json with {"errors":"Not Found"}"#
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn missing_envelope_key_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/admin/events/1.json");
            then.status(StatusCode::OK).json_body(json!({ "product": { "id": 1 } }));
        });

        let err = client.events().get(1, None).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Decode);
        let decode = err.downcast_ref::<Decode>().unwrap();
        assert_eq!(decode.key, "event");
        assert_eq!(decode.path, "/admin/events/1.json");
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn unknown_verb_is_kept() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;

        let mock = server.mock(|when, then| {
            when.method(GET).path("/admin/events/2.json");
            then.status(StatusCode::OK).json_body(json!({
                "event": { "id": 2, "verb": "fulfillment_hold", "arguments": null }
            }));
        });

        let event = client.events().get(2, None).await?;

        assert_eq!(event.verb, Some(Verb::Unknown("fulfillment_hold".to_owned())));
        assert!(event.arguments.is_empty(), "null arguments");
        mock.assert();

        Ok(())
    }
}

mod list {
    use futures_util::StreamExt as _;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use shopify_client_sdk::error::Kind;
    use shopify_client_sdk::event::Events as _;
    use shopify_client_sdk::event::types::{EventListFilter, Verb};
    use shopify_client_sdk::filter::{Filter, ListFilter};
    use shopify_client_sdk::pagination::stream_list;
    use shopify_client_sdk::{Client, Config};

    #[tokio::test]
    async fn list_should_parse_link_header() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;
        let next = server.url("/admin/events.json?limit=2&page_info=eyJsYXN0X2lkIjoy");

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/events.json")
                .query_param("limit", "2")
                .query_param("verb", "destroy");
            then.status(StatusCode::OK)
                .header("Link", format!(r#"<{next}>; rel="next""#))
                .json_body(json!({
                    "events": [
                        { "id": 1, "verb": "destroy" },
                        { "id": 2, "verb": "destroy" }
                    ]
                }));
        });

        let filter = EventListFilter::builder()
            .limit(2)
            .verb(Verb::Destroy)
            .build();
        let page = client.events().list_with(&filter).await?;

        assert_eq!(page.items.len(), 2);
        assert!(page.has_next_page(), "next link present");
        assert!(!page.has_previous_page(), "first page");
        assert_eq!(
            page.next_page_filter(),
            Some(
                ListFilter::builder()
                    .limit(2)
                    .page_info("eyJsYXN0X2lkIjoy")
                    .build()
            )
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn list_for_subject_should_pluralize() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;
        let events = client.events();

        let orders = server.mock(|when, then| {
            when.method(GET).path("/admin/orders/450789469/events.json");
            then.status(StatusCode::OK)
                .json_body(json!({ "events": [{ "id": 1, "subject_type": "Order" }] }));
        });
        let blogs = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/blogs/241253187/events.json")
                .query_param("verb", "published");
            then.status(StatusCode::OK).json_body(json!({ "events": [] }));
        });

        let page = events
            .list_for_subject(450_789_469, "Order", &Filter::new())
            .await?;
        assert_eq!(page.items[0].subject_type.as_deref(), Some("Order"));

        let filter = EventListFilter::builder().verb(Verb::Published).build();
        let page = events
            .list_for_subject_with(241_253_187, "Blogs", &filter)
            .await?;
        assert!(page.items.is_empty(), "no events");

        orders.assert();
        blogs.assert();

        Ok(())
    }

    #[tokio::test]
    async fn list_for_subject_should_stay_on_shop_host() -> anyhow::Result<()> {
        let shop = MockServer::start();
        let other = MockServer::start();
        let client = Client::new(shop.base_url(), "shpat_secret", Config::default())?;
        let events = client.events();

        let elsewhere = other.mock(|when, then| {
            when.method(GET);
            then.status(StatusCode::OK).json_body(json!({ "events": [] }));
        });
        let scoped = shop.mock(|when, then| {
            when.method(GET)
                .path_includes("/1/events.json")
                .query_param_missing("limit");
            then.status(StatusCode::OK).json_body(json!({ "events": [] }));
        });

        for subject_type in [
            format!("{}/steal", other.base_url()),
            "Order?limit=1".to_owned(),
            "../../products".to_owned(),
        ] {
            events
                .list_for_subject(1, &subject_type, &Filter::new())
                .await?;
        }

        elsewhere.assert_calls(0);
        scoped.assert_calls(3);

        Ok(())
    }

    #[tokio::test]
    async fn list_for_empty_subject_type_should_fail() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;

        let err = client
            .events()
            .list_for_subject(1, "", &Filter::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);

        Ok(())
    }

    #[tokio::test]
    async fn stream_should_follow_next_links() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;
        let events = client.events();
        let next = server.url("/admin/events.json?limit=2&page_info=page2");

        let first = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/events.json")
                .query_param("limit", "2")
                .is_true(|req| req.query_params().iter().all(|(k, _)| k != "page_info"));
            then.status(StatusCode::OK)
                .header("Link", format!(r#"<{next}>; rel="next""#))
                .json_body(json!({ "events": [{ "id": 1 }, { "id": 2 }] }));
        });
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/admin/events.json")
                .query_param("limit", "2")
                .query_param("page_info", "page2");
            then.status(StatusCode::OK)
                .json_body(json!({ "events": [{ "id": 3 }] }));
        });

        let stream = stream_list(
            Filter::from(ListFilter::builder().limit(2).build()),
            |filter| {
                let events = events.clone();
                async move { events.list(&filter).await }
            },
        );
        let ids = stream
            .map(|event| event.map(|e| e.id))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(ids, vec![1, 2, 3]);
        first.assert();
        second.assert();

        Ok(())
    }
}

mod decoration {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use httpmock::{Method::GET, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;
    use shopify_client_sdk::Result;
    use shopify_client_sdk::event::types::{Event, EventCountFilter};
    use shopify_client_sdk::event::{self, Events};
    use shopify_client_sdk::filter::Filter;
    use shopify_client_sdk::pagination::ListResult;
    use shopify_client_sdk::types::Id;
    use shopify_client_sdk::{Client, Config};

    /// Counts every call that reaches the wrapped client.
    struct Counting {
        inner: event::Client,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Events for Counting {
        async fn count(&self, filter: &Filter) -> Result<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.count(filter).await
        }

        async fn get(&self, event_id: Id, fields: Option<&str>) -> Result<Event> {
            self.inner.get(event_id, fields).await
        }

        async fn list(&self, filter: &Filter) -> Result<ListResult<Event>> {
            self.inner.list(filter).await
        }

        async fn list_for_subject(
            &self,
            subject_id: Id,
            subject_type: &str,
            filter: &Filter,
        ) -> Result<ListResult<Event>> {
            self.inner
                .list_for_subject(subject_id, subject_type, filter)
                .await
        }
    }

    #[tokio::test]
    async fn sugar_methods_go_through_overrides() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = Client::new(server.base_url(), "shpat_token", Config::default())?;
        let counting = Counting {
            inner: client.events(),
            calls: AtomicUsize::new(0),
        };

        let mock = server.mock(|when, then| {
            when.method(GET).path("/admin/events/count.json");
            then.status(StatusCode::OK).json_body(json!({ "count": 5 }));
        });

        let count = counting.count_with(&EventCountFilter::default()).await?;

        assert_eq!(count, 5);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
        mock.assert();

        Ok(())
    }
}
