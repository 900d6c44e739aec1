use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

/// HTTP method type, re-exported for use with error inspection.
pub use reqwest::Method;
/// HTTP status code type, re-exported for use with error inspection.
pub use reqwest::StatusCode;
use reqwest::header;
use serde_json::Value;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The remote API rejected the request with a non-successful HTTP status
    Status,
    /// The response body could not be decoded into the expected shape
    Decode,
    /// Input rejected locally before any request was made
    Validation,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Validation {
            reason: message.into(),
        }
        .into()
    }

    pub fn status<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        Status::new(status_code, method, path, message).into()
    }

    pub fn decode<S: Into<String>>(method: Method, path: String, key: &str, reason: S) -> Self {
        Decode {
            method,
            path,
            key: key.to_owned(),
            reason: reason.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A non-2xx response from the Admin API.
#[non_exhaustive]
#[derive(Debug)]
pub struct Status {
    pub status_code: StatusCode,
    pub method: Method,
    pub path: String,
    /// Raw response body.
    pub message: String,
    /// The response body parsed as JSON, when it was JSON.
    pub payload: Option<Value>,
    /// Value of the `X-Request-Id` response header.
    pub request_id: Option<String>,
    /// Seconds to wait before retrying, from the `Retry-After` header (sent with 429s).
    pub retry_after: Option<u64>,
}

impl Status {
    pub fn new<S: Into<String>>(
        status_code: StatusCode,
        method: Method,
        path: String,
        message: S,
    ) -> Self {
        let message = message.into();
        let payload = serde_json::from_str::<Value>(&message).ok();

        Self {
            status_code,
            method,
            path,
            message,
            payload,
            request_id: None,
            retry_after: None,
        }
    }

    #[must_use]
    pub fn with_headers(mut self, headers: &header::HeaderMap) -> Self {
        self.request_id = headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        self.retry_after = headers
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        self
    }

    /// Flattens the `errors` (or `error`) member of the payload into readable messages.
    ///
    /// The API reports errors as a plain string, a list of strings, or an object mapping a
    /// field name to one or more messages. Field messages are prefixed with the field name.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        let Some(payload) = &self.payload else {
            return Vec::new();
        };
        let Some(errors) = payload.get("errors").or_else(|| payload.get("error")) else {
            return Vec::new();
        };

        match errors {
            Value::String(s) => vec![s.clone()],
            Value::Array(items) => items.iter().map(value_to_message).collect(),
            Value::Object(fields) => fields
                .iter()
                .flat_map(|(field, messages)| match messages {
                    Value::Array(items) => items
                        .iter()
                        .map(|m| format!("{field}: {}", value_to_message(m)))
                        .collect::<Vec<_>>(),
                    other => vec![format!("{field}: {}", value_to_message(other))],
                })
                .collect(),
            other => vec![other.to_string()],
        }
    }
}

// The API sends fractional seconds, e.g. `2.0`
fn parse_retry_after(value: &str) -> Option<u64> {
    let secs = value.trim().parse::<f64>().ok()?;
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Checked non-negative and finite above"
    )]
    let whole = secs.ceil() as u64;
    Some(whole)
}

fn value_to_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error({}) making {} call to {} with {}",
            self.status_code, self.method, self.path, self.message
        )
    }
}

impl StdError for Status {}

/// The response was successful but its body did not have the expected shape.
#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    pub method: Method,
    pub path: String,
    /// The envelope key that was being unwrapped.
    pub key: String,
    pub reason: String,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to decode `{}` from {} call to {}: {}",
            self.key, self.method, self.path, self.reason
        )
    }
}

impl StdError for Decode {}

#[non_exhaustive]
#[derive(Debug)]
pub struct Validation {
    pub reason: String,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid: {}", self.reason)
    }
}

impl StdError for Validation {}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<header::InvalidHeaderValue> for Error {
    fn from(e: header::InvalidHeaderValue) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_html_form::ser::Error> for Error {
    fn from(e: serde_html_form::ser::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<Validation> for Error {
    fn from(err: Validation) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Status> for Error {
    fn from(err: Status) -> Self {
        Error::with_source(Kind::Status, err)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}
