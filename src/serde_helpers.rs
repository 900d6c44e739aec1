//! Envelope handling and lenient deserialization.
//!
//! Every Admin API body nests its payload under a named key (`{"event": {...}}`,
//! `{"images": [...]}`, `{"count": 3}`). The helpers here add and strip that envelope.
//!
//! When the `tracing` feature is enabled, decoding also logs warnings for any unknown
//! fields encountered, helping detect API changes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::Result;
use crate::error::{Error, Method};

/// Wraps `record` as `{ key: record }`.
pub(crate) fn wrap_envelope<T: Serialize + ?Sized>(key: &str, record: &T) -> Result<Value> {
    let mut envelope = Map::with_capacity(1);
    envelope.insert(key.to_owned(), serde_json::to_value(record)?);

    Ok(Value::Object(envelope))
}

/// Takes the value under `key` out of `body` and decodes it.
///
/// A body without `key` and a value that does not fit `T` are both reported as
/// [`crate::error::Kind::Decode`] errors naming `method`, `path` and `key`.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    mut body: Value,
    key: &str,
    method: &Method,
    path: &str,
) -> Result<T> {
    let Some(value) = body.get_mut(key).map(Value::take) else {
        #[cfg(feature = "tracing")]
        tracing::warn!(method = %method, path = %path, key, "response is missing envelope key");

        return Err(Error::decode(
            method.clone(),
            path.to_owned(),
            key,
            "response body is missing the envelope key",
        ));
    };

    deserialize_with_warnings(value).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!(
            type_name = %std::any::type_name::<T>(),
            method = %method,
            path = %path,
            field = %e.path(),
            error = %e.inner(),
            "deserialization failed"
        );

        Error::decode(
            method.clone(),
            path.to_owned(),
            key,
            format!("at `{}`: {}", e.path(), e.inner()),
        )
    })
}

type PathError = serde_path_to_error::Error<serde_json::Error>;

/// Deserializes `value`, reporting the path of the first mismatch and logging any
/// fields `T` does not capture.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
) -> std::result::Result<T, PathError> {
    use std::any::type_name;

    tracing::trace!(
        type_name = %type_name::<T>(),
        json = %value,
        "deserializing JSON"
    );

    let mut unknown_fields: Vec<String> = Vec::new();
    let result: T = serde_path_to_error::deserialize(serde_ignored::Deserializer::new(
        value,
        &mut |path| unknown_fields.push(path.to_string()),
    ))?;

    for field in unknown_fields {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %field,
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Deserializes `value`, reporting the path of the first mismatch.
#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(
    value: Value,
) -> std::result::Result<T, PathError> {
    serde_path_to_error::deserialize(value)
}

/// Treats an explicit JSON `null` the same as a missing field.
///
/// Use together with `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
