//! Transport client for the Shopify Admin REST API.
//!
//! [`Client`] owns the shop's base URL, the access token and the HTTP connection pool.
//! It knows how to turn a relative `.json` path into a request, execute it, map failures
//! to [`crate::error::Error`] and strip the JSON envelope from the response. The resource
//! clients in [`crate::event`] and [`crate::product_image`] are thin layers on top of it.
//!
//! # Example
//!
//! ```no_run
//! use shopify_client_sdk::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder().api_version("2024-10").build();
//! let client = Client::new("my-shop.myshopify.com", "shpat_token", config)?;
//!
//! // https://my-shop.myshopify.com/admin/api/2024-10/events/count.json
//! let url = client.prepare_request("events/count.json")?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use bon::Builder;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::event;
use crate::filter::Filter;
use crate::pagination::{LinkHeader, ListResult};
use crate::product_image;
use crate::resource::{COUNT_KEY, Resource, ResourcePath};
use crate::serde_helpers::{unwrap_envelope, wrap_envelope};
use crate::types::Id;
use crate::Result;

const DEFAULT_USER_AGENT: &str = "shopify_client_sdk";

/// Configuration for [`Client`]
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Admin API version, e.g. `2024-10`. When set, requests go to `/admin/api/{version}/`,
    /// otherwise to the unversioned `/admin/` path which the shop resolves to its oldest
    /// supported version.
    #[builder(into)]
    api_version: Option<String>,
    /// Total time allowed for a single request, from connect until the body is read.
    timeout: Option<Duration>,
    /// Overrides the `User-Agent` header. Defaults to `shopify_client_sdk`.
    #[builder(into)]
    user_agent: Option<String>,
}

/// A successful HTTP exchange before any envelope is unwrapped.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub method: Method,
    /// Path of the request URL, used in error reports.
    pub path: String,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// The body parsed as JSON, or [`Value::Null`] when the body was empty.
    pub body: Value,
}

impl RawResponse {
    /// Decodes the value stored under `root_key` in the body.
    pub fn unwrap_key<T: DeserializeOwned>(self, root_key: &str) -> Result<T> {
        unwrap_envelope(self.body, root_key, &self.method, &self.path)
    }

    /// Parses the pagination links of the `Link` header, if any.
    #[must_use]
    pub fn link_header(&self) -> Option<LinkHeader> {
        self.headers
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(LinkHeader::parse)
    }
}

#[derive(Debug)]
struct ClientInner {
    config: Config,
    credentials: Credentials,
    /// `https://{shop}/admin/` or `https://{shop}/admin/api/{version}/`
    base: Url,
    /// The inner [`ReqwestClient`] used to make requests to `base`. Carries the access token
    /// as a default header.
    client: ReqwestClient,
}

/// Client for the Shopify Admin REST API of a single shop.
///
/// Cloning is cheap and clones share the connection pool; a client can serve any number of
/// concurrent calls.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    /// Creates a client for `shop_url` authenticated with `access_token`.
    ///
    /// `shop_url` may be a bare host such as `my-shop.myshopify.com` (HTTPS is assumed) or a
    /// full URL. Any path, query or fragment it carries is discarded.
    pub fn new<U: Into<String>, T: Into<String>>(
        shop_url: U,
        access_token: T,
        config: Config,
    ) -> Result<Client> {
        Self::with_credentials(Credentials::new(shop_url, access_token), config)
    }

    /// Creates a client from previously built [`Credentials`], e.g.
    /// [`Credentials::from_env`].
    pub fn with_credentials(credentials: Credentials, config: Config) -> Result<Client> {
        let base = admin_base(credentials.shop_url(), config.api_version.as_deref())?;

        let headers = default_headers(&credentials, &config)?;

        let mut builder = ReqwestClient::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(base = %base, "created Admin API client");

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                credentials,
                base,
                client,
            }),
        })
    }

    /// Returns the base URL every request path is joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Client for the events resource.
    #[must_use]
    pub fn events(&self) -> event::Client {
        event::Client::with_client(self.clone())
    }

    /// Client for the product images resource.
    #[must_use]
    pub fn product_images(&self) -> product_image::Client {
        product_image::Client::with_client(self.clone())
    }

    /// Resolves a path such as `events/count.json` against the shop's admin URL.
    ///
    /// Paths that resolve outside the admin URL, such as absolute URLs or `../` segments,
    /// are rejected.
    pub fn prepare_request(&self, path: &str) -> Result<Url> {
        let base = &self.inner.base;
        let url = base.join(path.trim_start_matches('/'))?;

        if url.origin() != base.origin() || !url.path().starts_with(base.path()) {
            return Err(Error::validation(format!(
                "path {path:?} resolves outside of {base}"
            )));
        }

        Ok(url)
    }

    /// Sends `method` to `url` with an optional JSON `body`.
    ///
    /// Non-2xx responses are returned as [`crate::error::Kind::Status`] errors.
    pub async fn execute_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<RawResponse> {
        let mut builder = self.inner.client.request(method, url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        let request = builder.build()?;

        crate::request(&self.inner.client, request).await
    }

    /// Executes a request and decodes the value stored under `root_key`.
    pub async fn execute_and_unwrap<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        root_key: &str,
        query: &Filter,
        body: Option<Value>,
    ) -> Result<T> {
        let mut url = self.prepare_request(path)?;
        query.apply_to(&mut url);

        self.execute_request(method, url, body)
            .await?
            .unwrap_key(root_key)
    }

    /// Executes a `GET` against a list endpoint and decodes the records stored under
    /// `root_key` together with the pagination links of the response.
    pub async fn execute_list_and_unwrap<T: DeserializeOwned>(
        &self,
        path: &str,
        root_key: &str,
        filter: &Filter,
    ) -> Result<ListResult<T>> {
        let mut url = self.prepare_request(path)?;
        filter.apply_to(&mut url);

        let response = self.execute_request(Method::GET, url, None).await?;
        let link = response.link_header();
        let items = response.unwrap_key(root_key)?;

        Ok(ListResult::new(items, link))
    }

    /// `GET {path}/count.json`
    pub async fn count(&self, path: &ResourcePath, filter: &Filter) -> Result<u64> {
        self.execute_and_unwrap(Method::GET, &path.count(), COUNT_KEY, filter, None)
            .await
    }

    /// `GET {path}/{id}.json`, optionally restricted to a comma-separated list of `fields`.
    pub async fn get<R: Resource>(
        &self,
        path: &ResourcePath,
        id: Id,
        fields: Option<&str>,
    ) -> Result<R> {
        let mut query = Filter::new();
        if let Some(fields) = fields {
            query.insert("fields", fields);
        }

        self.execute_and_unwrap(Method::GET, &path.item(id), R::SINGULAR, &query, None)
            .await
    }

    /// `GET {path}.json`
    pub async fn list<R: Resource>(
        &self,
        path: &ResourcePath,
        filter: &Filter,
    ) -> Result<ListResult<R>> {
        self.execute_list_and_unwrap(&path.collection(), R::PLURAL, filter)
            .await
    }

    /// `POST {path}.json` with `{ singular: record }`, returning the created record.
    pub async fn create<R: Resource>(&self, path: &ResourcePath, record: &R) -> Result<R> {
        let body = wrap_envelope(R::SINGULAR, record)?;

        self.execute_and_unwrap(
            Method::POST,
            &path.collection(),
            R::SINGULAR,
            &Filter::new(),
            Some(body),
        )
        .await
    }

    /// `PUT {path}/{id}.json` with `{ singular: record }`, returning the updated record.
    pub async fn update<R: Resource>(&self, path: &ResourcePath, id: Id, record: &R) -> Result<R> {
        let body = wrap_envelope(R::SINGULAR, record)?;

        self.execute_and_unwrap(
            Method::PUT,
            &path.item(id),
            R::SINGULAR,
            &Filter::new(),
            Some(body),
        )
        .await
    }

    /// `DELETE {path}/{id}.json`. Success is signalled by the status code alone.
    pub async fn delete(&self, path: &ResourcePath, id: Id) -> Result<()> {
        let url = self.prepare_request(&path.item(id))?;
        self.execute_request(Method::DELETE, url, None).await?;

        Ok(())
    }
}

// `Content-Type` is left to `RequestBuilder::json` so bodiless requests don't claim one.
fn default_headers(credentials: &Credentials, config: &Config) -> Result<HeaderMap> {
    let mut headers = credentials.headers()?;
    let user_agent = match &config.user_agent {
        Some(agent) => HeaderValue::from_str(agent)?,
        None => HeaderValue::from_static(DEFAULT_USER_AGENT),
    };
    headers.insert(header::USER_AGENT, user_agent);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    Ok(headers)
}

fn admin_base(shop_url: &str, api_version: Option<&str>) -> Result<Url> {
    let trimmed = shop_url.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("shop url must not be empty"));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let mut url = Url::parse(&with_scheme)
        .map_err(|e| Error::validation(format!("invalid shop url {shop_url:?}: {e}")))?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(Error::validation(format!(
            "shop url {shop_url:?} has no host"
        )));
    }

    url.set_query(None);
    url.set_fragment(None);
    match api_version {
        Some(version) => url.set_path(&format!("/admin/api/{version}/")),
        None => url.set_path("/admin/"),
    }

    Ok(url)
}
