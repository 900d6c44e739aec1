use async_trait::async_trait;

use super::types::{ProductImage, ProductImageCountFilter};
use crate::Result;
use crate::client::{Client as AdminClient, Config};
use crate::filter::{Filter, ListFilter};
use crate::pagination::ListResult;
use crate::resource::{Resource, ResourcePath};
use crate::types::Id;

const PARENT: &str = "products";

/// Operations on the images of a product.
///
/// See [`crate::event::Events`] for how to decorate the default [`Client`].
#[async_trait]
pub trait ProductImages: Send + Sync {
    async fn count(&self, product_id: Id, filter: &Filter) -> Result<u64>;

    async fn list(&self, product_id: Id, filter: &Filter) -> Result<ListResult<ProductImage>>;

    /// Retrieves one image, optionally restricted to a comma-separated list of `fields`.
    async fn get(&self, product_id: Id, image_id: Id, fields: Option<&str>)
    -> Result<ProductImage>;

    /// Adds `image` to the product. Set either `src` or `attachment`.
    async fn create(&self, product_id: Id, image: &ProductImage) -> Result<ProductImage>;

    /// Replaces the fields of the image that are set on `image`.
    async fn update(
        &self,
        product_id: Id,
        image_id: Id,
        image: &ProductImage,
    ) -> Result<ProductImage>;

    async fn delete(&self, product_id: Id, image_id: Id) -> Result<()>;

    async fn count_with(&self, product_id: Id, filter: &ProductImageCountFilter) -> Result<u64> {
        self.count(product_id, &Filter::from(filter)).await
    }

    async fn list_with(
        &self,
        product_id: Id,
        filter: &ListFilter,
    ) -> Result<ListResult<ProductImage>> {
        self.list(product_id, &Filter::from(filter)).await
    }
}

/// Client for the product images resource of a shop.
#[derive(Clone, Debug)]
pub struct Client {
    client: AdminClient,
}

impl Client {
    pub fn new<U: Into<String>, T: Into<String>>(shop_url: U, access_token: T) -> Result<Self> {
        Ok(Self::with_client(AdminClient::new(
            shop_url,
            access_token,
            Config::default(),
        )?))
    }

    #[must_use]
    pub fn with_client(client: AdminClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    fn path(product_id: Id) -> ResourcePath {
        ResourcePath::nested(PARENT, product_id, ProductImage::PLURAL)
    }
}

#[async_trait]
impl ProductImages for Client {
    async fn count(&self, product_id: Id, filter: &Filter) -> Result<u64> {
        self.client.count(&Self::path(product_id), filter).await
    }

    async fn list(&self, product_id: Id, filter: &Filter) -> Result<ListResult<ProductImage>> {
        self.client.list(&Self::path(product_id), filter).await
    }

    async fn get(
        &self,
        product_id: Id,
        image_id: Id,
        fields: Option<&str>,
    ) -> Result<ProductImage> {
        self.client
            .get(&Self::path(product_id), image_id, fields)
            .await
    }

    async fn create(&self, product_id: Id, image: &ProductImage) -> Result<ProductImage> {
        self.client.create(&Self::path(product_id), image).await
    }

    async fn update(
        &self,
        product_id: Id,
        image_id: Id,
        image: &ProductImage,
    ) -> Result<ProductImage> {
        self.client
            .update(&Self::path(product_id), image_id, image)
            .await
    }

    async fn delete(&self, product_id: Id, image_id: Id) -> Result<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(product_id, image_id, "deleting product image");

        self.client.delete(&Self::path(product_id), image_id).await
    }
}
