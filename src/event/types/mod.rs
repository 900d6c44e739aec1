//! Types for the events resource.
//!
//! - **Common types**: [`Verb`], shared by the filters and the [`Event`] record.
//! - **Request types**: [`EventListFilter`] and [`EventCountFilter`], both convertible into
//!   the generic [`crate::filter::Filter`].
//! - **Response types**: [`Event`].

use serde::{Deserialize, Serialize};

pub mod request;
pub mod response;

pub use request::{EventCountFilter, EventListFilter};
pub use response::Event;

/// The action an event records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Verb {
    Create,
    Update,
    Destroy,
    Published,
    Unpublished,
    Placed,
    Confirmed,
    Closed,
    Reopened,
    MailSent,
    AuthorizationSuccess,
    AuthorizationFailure,
    CaptureSuccess,
    CaptureFailure,
    SaleSuccess,
    SaleFailure,
    RefundSuccess,
    RefundFailure,
    VoidSuccess,
    VoidFailure,
    /// Unknown verb from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}
