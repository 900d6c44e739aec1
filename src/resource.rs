//! Declarative description of REST resources.
//!
//! A [`Resource`] names the JSON envelope keys of a record type and a [`ResourcePath`]
//! builds the `.json` paths for its collection, items and count endpoint. Resource
//! clients combine the two instead of repeating key and path strings at each call site.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Result;
use crate::error::Error;
use crate::types::Id;

/// A record type exposed by the Admin API.
pub trait Resource: DeserializeOwned + Serialize + Send + Sync {
    /// Key wrapping a single record, e.g. `"event"`.
    const SINGULAR: &'static str;
    /// Key wrapping a list of records, e.g. `"events"`.
    const PLURAL: &'static str;
}

/// Key wrapping the result of every `count.json` endpoint.
pub const COUNT_KEY: &str = "count";

/// The location of a resource collection, optionally nested under a parent record.
///
/// # Example
///
/// ```
/// use shopify_client_sdk::resource::ResourcePath;
///
/// let images = ResourcePath::nested("products", 632_910_392, "images");
///
/// assert_eq!(images.collection(), "products/632910392/images.json");
/// assert_eq!(images.item(850_703_190), "products/632910392/images/850703190.json");
/// assert_eq!(images.count(), "products/632910392/images/count.json");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    base: String,
}

impl ResourcePath {
    /// A top-level collection such as `events`.
    #[must_use]
    pub fn new(plural: &str) -> Self {
        Self {
            base: plural.to_owned(),
        }
    }

    /// A collection scoped to a parent record, such as `products/{id}/images`.
    ///
    /// `parent` is percent-encoded as a single path segment.
    #[must_use]
    pub fn nested<P: fmt::Display>(parent: &str, parent_id: P, plural: &str) -> Self {
        Self {
            base: format!("{}/{parent_id}/{plural}", urlencoding::encode(parent)),
        }
    }

    #[must_use]
    pub fn collection(&self) -> String {
        format!("{}.json", self.base)
    }

    #[must_use]
    pub fn item(&self, id: Id) -> String {
        format!("{}/{id}.json", self.base)
    }

    #[must_use]
    pub fn count(&self) -> String {
        format!("{}/count.json", self.base)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

/// Normalizes a free-text subject type into the plural, lower-case path segment the API
/// expects: an `s` is appended unless the input already ends in `s` or `S`.
///
/// This is a purely textual rule. Irregular plurals (`"Category"` becomes `"categorys"`)
/// must be passed already pluralized.
///
/// # Example
///
/// ```
/// use shopify_client_sdk::resource::pluralize_subject_type;
///
/// assert_eq!(pluralize_subject_type("Product")?, "products");
/// assert_eq!(pluralize_subject_type("Blogs")?, "blogs");
/// # Ok::<(), shopify_client_sdk::error::Error>(())
/// ```
pub fn pluralize_subject_type(subject_type: &str) -> Result<String> {
    if subject_type.is_empty() {
        return Err(Error::validation("subject type must not be empty"));
    }

    let mut segment = subject_type.to_lowercase();
    if !segment.ends_with('s') {
        segment.push('s');
    }

    Ok(segment)
}
