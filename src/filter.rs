//! Query-parameter filters.
//!
//! Every list and count call ultimately takes a [`Filter`], an ordered mapping from
//! query-parameter name to value. Typed filters such as [`ListFilter`] or the
//! resource-specific ones in each resource's `types` module convert into a [`Filter`]
//! field-for-field, so calling a `*_with` method with a typed filter sends exactly the
//! same query as calling the generic method with the converted [`Filter`].

use std::collections::BTreeMap;
use std::fmt::Display;

use bon::Builder;
use serde::Serialize;
use serde_with::skip_serializing_none;
use url::Url;

use crate::Result;

/// Query parameters for a list or count call.
///
/// Keys are not validated; unknown parameters are passed through to the API.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Filter(BTreeMap<String, String>);

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens any serializable parameter struct into a [`Filter`].
    ///
    /// `None` fields must be skipped by the struct's `Serialize` impl to be left out.
    pub fn from_params<P: Serialize + ?Sized>(params: &P) -> Result<Self> {
        let encoded = serde_html_form::to_string(params)?;

        Ok(url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect())
    }

    /// Sets `key` to `value`, replacing any previous value.
    #[must_use]
    pub fn with<K: Into<String>, V: Display>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert<K: Into<String>, V: Display>(&mut self, key: K, value: V) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends every parameter to the query of `url`. An empty filter leaves `url` untouched.
    pub(crate) fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }

        url.query_pairs_mut().extend_pairs(self.iter());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Implements `From<&T>` and `From<T>` into [`Filter`] for typed filter structs.
macro_rules! impl_into_filter {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<&$ty> for $crate::filter::Filter {
                fn from(params: &$ty) -> Self {
                    $crate::filter::Filter::from_params(params)
                        .inspect_err(|e| {
                            #[cfg(feature = "tracing")]
                            tracing::error!(filter = stringify!($ty), "Unable to convert filter to query parameters {e:?}");
                            #[cfg(not(feature = "tracing"))]
                            let _: &$crate::error::Error = e;
                        })
                        .unwrap_or_default()
                }
            }

            impl From<$ty> for $crate::filter::Filter {
                fn from(params: $ty) -> Self {
                    Self::from(&params)
                }
            }
        )+
    };
}

pub(crate) use impl_into_filter;

/// Cursor pagination parameters accepted by every list endpoint.
///
/// When `page_info` is set the API only honours `limit` and `fields`; any other
/// parameter on that request is rejected remotely.
///
/// # Example
///
/// ```
/// use shopify_client_sdk::filter::{Filter, ListFilter};
///
/// let filter = ListFilter::builder().limit(50).fields("id,src").build();
/// let generic = Filter::from(&filter);
///
/// assert_eq!(generic.get("limit"), Some("50"));
/// assert_eq!(generic.get("fields"), Some("id,src"));
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize)]
#[non_exhaustive]
pub struct ListFilter {
    /// Maximum number of records per page (the API caps this at 250).
    pub limit: Option<u32>,
    /// Opaque cursor taken from a previous page's `Link` header.
    #[builder(into)]
    pub page_info: Option<String>,
    /// Comma-separated allow-list of fields to return.
    #[builder(into)]
    pub fields: Option<String>,
}

impl_into_filter!(ListFilter);
