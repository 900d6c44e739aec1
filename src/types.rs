//! Re-exported types from external crates for convenience.
//!
//! These types appear in this SDK's public API and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for timestamps in API responses and filters.
pub use chrono::{DateTime, Utc};
/// Arbitrary JSON, used for event arguments and error payloads.
pub use serde_json::Value;
/// Parsed URLs, used for the shop host and pagination links.
pub use url::Url;

/// Numeric identifier the Admin API assigns to every record.
pub type Id = u64;
