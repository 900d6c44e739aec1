//! Cursor-based pagination.
//!
//! List endpoints return at most one page of records. The cursor for the adjacent pages
//! arrives in the `Link` response header:
//!
//! ```text
//! Link: <https://shop.myshopify.com/admin/api/2024-10/events.json?limit=50&page_info=abc>; rel="next",
//!       <https://shop.myshopify.com/admin/api/2024-10/events.json?limit=50&page_info=xyz>; rel="previous"
//! ```
//!
//! [`ListResult`] keeps the parsed links next to the records, and [`stream_list`] walks
//! every page of a collection as a single [`Stream`].

use std::future::Future;

use async_stream::try_stream;
use futures::Stream;
use url::Url;

use crate::Result;
use crate::filter::{Filter, ListFilter};

/// One page of records returned by a list endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    /// Pagination links, when the response carried a `Link` header.
    pub link: Option<LinkHeader>,
}

impl<T> ListResult<T> {
    #[must_use]
    pub fn new(items: Vec<T>, link: Option<LinkHeader>) -> Self {
        Self { items, link }
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_link().is_some()
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.previous_link().is_some()
    }

    #[must_use]
    pub fn next_link(&self) -> Option<&PagingLink> {
        self.link.as_ref()?.next.as_ref()
    }

    #[must_use]
    pub fn previous_link(&self) -> Option<&PagingLink> {
        self.link.as_ref()?.previous.as_ref()
    }

    /// Builds the filter for the next page, keeping the `limit` and `fields` of the link.
    #[must_use]
    pub fn next_page_filter(&self) -> Option<ListFilter> {
        self.next_link().map(PagingLink::filter)
    }

    /// Builds the filter for the previous page, keeping the `limit` and `fields` of the link.
    #[must_use]
    pub fn previous_page_filter(&self) -> Option<ListFilter> {
        self.previous_link().map(PagingLink::filter)
    }
}

impl<T> IntoIterator for ListResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// The `next` and `previous` links of a `Link` header.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHeader {
    pub next: Option<PagingLink>,
    pub previous: Option<PagingLink>,
}

impl LinkHeader {
    /// Parses a `Link` header value. Links other than `next` and `previous`, and links
    /// without a `page_info` query parameter, are ignored. Returns `None` when nothing usable
    /// remains.
    #[must_use]
    pub fn parse(header: &str) -> Option<Self> {
        let mut parsed = LinkHeader::default();

        for part in split_links(header) {
            let Some((target, params)) = part.trim().split_once(';') else {
                continue;
            };
            let Some(target) = target
                .trim()
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
            else {
                continue;
            };

            let rel = params.split(';').find_map(|param| {
                let (name, value) = param.trim().split_once('=')?;
                name.trim()
                    .eq_ignore_ascii_case("rel")
                    .then(|| value.trim().trim_matches('"').to_owned())
            });

            let Some(link) = PagingLink::parse(target) else {
                continue;
            };

            match rel.as_deref() {
                Some("next") => parsed.next = Some(link),
                Some("previous" | "prev") => parsed.previous = Some(link),
                _ => {}
            }
        }

        (parsed.next.is_some() || parsed.previous.is_some()).then_some(parsed)
    }
}

// Commas separate links but may also appear unescaped inside the `<...>` target.
fn split_links(header: &str) -> impl Iterator<Item = &str> {
    let mut inside_target = false;
    header.split(move |c| match c {
        '<' => {
            inside_target = true;
            false
        }
        '>' => {
            inside_target = false;
            false
        }
        ',' => !inside_target,
        _ => false,
    })
}

/// A single pagination link and the parameters extracted from it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingLink {
    pub url: Url,
    pub page_info: String,
    pub limit: Option<u32>,
    pub fields: Option<String>,
}

impl PagingLink {
    fn parse(target: &str) -> Option<Self> {
        let url = Url::parse(target).ok()?;

        let mut page_info = None;
        let mut limit = None;
        let mut fields = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "page_info" => page_info = Some(value.into_owned()),
                "limit" => limit = value.parse().ok(),
                "fields" => fields = Some(value.into_owned()),
                _ => {}
            }
        }

        Some(Self {
            page_info: page_info?,
            url,
            limit,
            fields,
        })
    }

    /// The filter that requests the page this link points at.
    #[must_use]
    pub fn filter(&self) -> ListFilter {
        ListFilter {
            limit: self.limit,
            page_info: Some(self.page_info.clone()),
            fields: self.fields.clone(),
        }
    }
}

/// Returns a stream over every record of a paginated collection.
///
/// `call` is invoked with `first` and then with the filter of each following page until a
/// page arrives without a `next` link. The first error ends the stream.
///
/// # Example
///
/// ```no_run
/// use futures::StreamExt as _;
/// use shopify_client_sdk::event::Events as _;
/// use shopify_client_sdk::filter::{Filter, ListFilter};
/// use shopify_client_sdk::{Client, Config, pagination::stream_list};
/// use tokio::pin;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("my-shop.myshopify.com", "shpat_token", Config::default())?;
/// let events = client.events();
///
/// let first = Filter::from(ListFilter::builder().limit(250).build());
/// let stream = stream_list(first, |filter| {
///     let events = events.clone();
///     async move { events.list(&filter).await }
/// });
///
/// pin!(stream);
/// while let Some(event) = stream.next().await {
///     println!("{}", event?.id);
/// }
/// # Ok(())
/// # }
/// ```
pub fn stream_list<Call, Fut, Data>(first: Filter, call: Call) -> impl Stream<Item = Result<Data>>
where
    Call: Fn(Filter) -> Fut,
    Fut: Future<Output = Result<ListResult<Data>>>,
{
    try_stream! {
        let mut filter = first;

        loop {
            let page = call(filter).await?;
            let next = page.next_page_filter();

            for item in page.items {
                yield item;
            }

            match next {
                Some(next) => filter = Filter::from(&next),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEXT: &str = "https://shop.myshopify.com/admin/api/2024-10/events.json?limit=3&page_info=nextCursor";
    const PREVIOUS: &str = "https://shop.myshopify.com/admin/api/2024-10/events.json?page_info=prevCursor&limit=3&fields=id%2Cverb";

    #[test]
    fn parse_next_and_previous() {
        let header = format!(r#"<{PREVIOUS}>; rel="previous", <{NEXT}>; rel="next""#);

        let link = LinkHeader::parse(&header).expect("links present");

        let next = link.next.expect("next present");
        assert_eq!(next.page_info, "nextCursor");
        assert_eq!(next.limit, Some(3));
        assert_eq!(next.fields, None);
        assert_eq!(next.url.as_str(), NEXT);

        let previous = link.previous.expect("previous present");
        assert_eq!(previous.page_info, "prevCursor");
        assert_eq!(previous.fields.as_deref(), Some("id,verb"));
    }

    #[test]
    fn parse_keeps_commas_inside_target() {
        let header = r#"<https://shop.example/admin/events.json?fields=id,verb&page_info=abc>; rel="next""#;

        let link = LinkHeader::parse(header).expect("links present");

        assert_eq!(
            link.next.expect("next present").fields.as_deref(),
            Some("id,verb")
        );
    }

    #[test]
    fn parse_next_only() {
        let header = format!(r#"<{NEXT}>; rel="next""#);

        let link = LinkHeader::parse(&header).expect("links present");

        assert!(link.next.is_some(), "next link parsed");
        assert!(link.previous.is_none(), "no previous link");
    }

    #[test]
    fn parse_ignores_garbage() {
        assert!(LinkHeader::parse("").is_none(), "empty header");
        assert!(LinkHeader::parse("not a link").is_none(), "no angle brackets");
        assert!(
            LinkHeader::parse(r#"<https://shop.example/events.json>; rel="next""#).is_none(),
            "link without page_info"
        );
        assert!(
            LinkHeader::parse(&format!(r#"<{NEXT}>; rel="canonical""#)).is_none(),
            "unrelated rel"
        );
    }

    #[test]
    fn next_page_filter_carries_limit_and_fields() {
        let header = format!(r#"<{PREVIOUS}>; rel="next""#);
        let result = ListResult::new(vec![1, 2, 3], LinkHeader::parse(&header));

        let filter = result.next_page_filter().expect("next page");

        assert_eq!(
            filter,
            ListFilter::builder()
                .limit(3)
                .page_info("prevCursor")
                .fields("id,verb")
                .build()
        );
        assert!(!result.has_previous_page(), "only next was given");
    }

    #[test]
    fn result_without_link_has_no_pages() {
        let result = ListResult::new(vec!["a"], None);

        assert!(!result.has_next_page(), "no next page");
        assert!(result.next_page_filter().is_none(), "no next filter");
        assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["a"]);
    }
}
