use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::resource::Resource;
use crate::types::Id;

/// An image of a product.
///
/// Records read from the API carry the server-assigned fields. To create an image, set
/// either `src` (a URL the server downloads) or `attachment` (base64 image data, see
/// [`ProductImage::with_attachment_bytes`]); the server stores the picture and reports its
/// location in `src`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct ProductImage {
    pub id: Option<Id>,
    pub product_id: Option<Id>,
    /// 1-based order of the image in the product's gallery.
    pub position: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Location of the image.
    #[builder(into)]
    pub src: Option<String>,
    /// Alternative text.
    #[builder(into)]
    pub alt: Option<String>,
    /// Variants shown with this image. `Some(vec![])` detaches the image from all variants.
    pub variant_ids: Option<Vec<Id>>,
    /// Base64 image data, only sent when creating or replacing the picture.
    #[builder(into)]
    pub attachment: Option<String>,
    /// File name for an `attachment` upload.
    #[builder(into)]
    pub filename: Option<String>,
    #[builder(into)]
    pub admin_graphql_api_id: Option<String>,
}

impl ProductImage {
    /// An image to upload from raw file contents.
    #[must_use]
    pub fn attachment_from_bytes(bytes: &[u8]) -> Self {
        Self::default().with_attachment_bytes(bytes)
    }

    /// Sets `attachment` to the base64 encoding of `bytes`.
    #[must_use]
    pub fn with_attachment_bytes(mut self, bytes: &[u8]) -> Self {
        self.attachment = Some(STANDARD.encode(bytes));
        self
    }
}

impl Resource for ProductImage {
    const SINGULAR: &'static str = "image";
    const PLURAL: &'static str = "images";
}
