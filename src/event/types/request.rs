#![allow(
    clippy::module_name_repetitions,
    reason = "Filter suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::Verb;
use crate::filter::impl_into_filter;
use crate::types::Id;

/// Parameters for listing events.
///
/// Converts into a [`crate::filter::Filter`]; passing this to
/// [`crate::event::Events::list_with`] is the same as passing the converted filter to
/// [`crate::event::Events::list`].
///
/// # Example
///
/// ```
/// use shopify_client_sdk::event::types::{EventListFilter, Verb};
/// use shopify_client_sdk::filter::Filter;
///
/// let filter = EventListFilter::builder()
///     .filter("Product,Order")
///     .verb(Verb::Destroy)
///     .limit(25)
///     .build();
///
/// let generic = Filter::from(&filter);
/// assert_eq!(generic.get("filter"), Some("Product,Order"));
/// assert_eq!(generic.get("verb"), Some("destroy"));
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[non_exhaustive]
pub struct EventListFilter {
    /// Maximum number of events per page (at most 250).
    pub limit: Option<u32>,
    /// Cursor of the page to fetch, see [`crate::pagination`].
    #[builder(into)]
    pub page_info: Option<String>,
    /// Comma-separated allow-list of fields to return.
    #[builder(into)]
    pub fields: Option<String>,
    /// Only events after this id.
    pub since_id: Option<Id>,
    /// Only events created at or after this time.
    pub created_at_min: Option<DateTime<Utc>>,
    /// Only events created at or before this time.
    pub created_at_max: Option<DateTime<Utc>>,
    /// Comma-separated subject types, e.g. `Product,Order`.
    #[builder(into)]
    pub filter: Option<String>,
    /// Only events with this verb.
    pub verb: Option<Verb>,
}

/// Parameters for counting events.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[non_exhaustive]
pub struct EventCountFilter {
    /// Only events created at or after this time.
    pub created_at_min: Option<DateTime<Utc>>,
    /// Only events created at or before this time.
    pub created_at_max: Option<DateTime<Utc>>,
}

impl_into_filter!(EventListFilter, EventCountFilter);
