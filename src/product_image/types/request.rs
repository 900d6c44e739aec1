#![allow(
    clippy::module_name_repetitions,
    reason = "Filter suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::filter::impl_into_filter;
use crate::types::Id;

/// Parameters for counting a product's images.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[non_exhaustive]
pub struct ProductImageCountFilter {
    /// Only images after this id.
    pub since_id: Option<Id>,
}

impl_into_filter!(ProductImageCountFilter);
