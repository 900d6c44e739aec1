use async_trait::async_trait;

use super::types::{Event, EventCountFilter, EventListFilter};
use crate::Result;
use crate::client::{Client as AdminClient, Config};
use crate::filter::Filter;
use crate::pagination::ListResult;
use crate::resource::{Resource, ResourcePath, pluralize_subject_type};
use crate::types::Id;

/// Operations on the events resource.
///
/// [`Client`] is the implementation backed by the Admin API. To change the behavior of a
/// single call, wrap a [`Client`] in your own type implementing this trait and forward the
/// calls you don't override. The `*_with` methods only convert their typed filter into a
/// [`Filter`] and delegate, so overriding the generic method covers both call shapes.
#[async_trait]
pub trait Events: Send + Sync {
    /// Counts the shop's events matching `filter`.
    async fn count(&self, filter: &Filter) -> Result<u64>;

    /// Retrieves a single event, optionally restricted to a comma-separated list of `fields`.
    async fn get(&self, event_id: Id, fields: Option<&str>) -> Result<Event>;

    /// Lists one page of the shop's events.
    async fn list(&self, filter: &Filter) -> Result<ListResult<Event>>;

    /// Lists one page of events of a single subject, e.g. all changes to one product.
    ///
    /// `subject_type` is free text such as `"Product"`, `"Order"` or `"Blogs"`. It is turned
    /// into the path segment by appending an `s` unless it already ends in one and
    /// lower-casing the result. Irregular plurals must be passed already pluralized.
    async fn list_for_subject(
        &self,
        subject_id: Id,
        subject_type: &str,
        filter: &Filter,
    ) -> Result<ListResult<Event>>;

    async fn count_with(&self, filter: &EventCountFilter) -> Result<u64> {
        self.count(&Filter::from(filter)).await
    }

    async fn list_with(&self, filter: &EventListFilter) -> Result<ListResult<Event>> {
        self.list(&Filter::from(filter)).await
    }

    async fn list_for_subject_with(
        &self,
        subject_id: Id,
        subject_type: &str,
        filter: &EventListFilter,
    ) -> Result<ListResult<Event>> {
        self.list_for_subject(subject_id, subject_type, &Filter::from(filter))
            .await
    }
}

/// Client for the events resource of a shop.
///
/// Obtained from [`AdminClient::events`] or built directly with [`Client::new`].
#[derive(Clone, Debug)]
pub struct Client {
    client: AdminClient,
    path: ResourcePath,
}

impl Client {
    /// Creates an events client for `shop_url` with the default [`Config`].
    pub fn new<U: Into<String>, T: Into<String>>(shop_url: U, access_token: T) -> Result<Self> {
        Ok(Self::with_client(AdminClient::new(
            shop_url,
            access_token,
            Config::default(),
        )?))
    }

    /// Creates an events client sharing the connection pool of `client`.
    #[must_use]
    pub fn with_client(client: AdminClient) -> Self {
        Self {
            client,
            path: ResourcePath::new(Event::PLURAL),
        }
    }

    #[must_use]
    pub fn client(&self) -> &AdminClient {
        &self.client
    }
}

#[async_trait]
impl Events for Client {
    async fn count(&self, filter: &Filter) -> Result<u64> {
        self.client.count(&self.path, filter).await
    }

    async fn get(&self, event_id: Id, fields: Option<&str>) -> Result<Event> {
        self.client.get(&self.path, event_id, fields).await
    }

    async fn list(&self, filter: &Filter) -> Result<ListResult<Event>> {
        self.client.list(&self.path, filter).await
    }

    async fn list_for_subject(
        &self,
        subject_id: Id,
        subject_type: &str,
        filter: &Filter,
    ) -> Result<ListResult<Event>> {
        let subject = pluralize_subject_type(subject_type)?;
        let path = ResourcePath::nested(&subject, subject_id, Event::PLURAL);

        #[cfg(feature = "tracing")]
        tracing::debug!(subject_type, path = %path, "listing subject events");

        self.client.list(&path, filter).await
    }
}
