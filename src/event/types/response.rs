use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::Verb;
use crate::resource::Resource;
use crate::serde_helpers::null_as_default;
use crate::types::Id;

/// A change recorded against a subject of the shop.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Event {
    pub id: Id,
    /// Id of the record the event is about.
    pub subject_id: Option<Id>,
    /// Type of the record the event is about, e.g. `Product`.
    #[builder(into)]
    pub subject_type: Option<String>,
    pub verb: Option<Verb>,
    /// Free-form values referenced by `message`, such as the subject's title.
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    pub arguments: Vec<Value>,
    /// Text body attached to the event, when there is one.
    #[builder(into)]
    pub body: Option<String>,
    /// Human readable description, may contain HTML.
    #[builder(into)]
    pub message: Option<String>,
    /// Name of the app or staff member that caused the event.
    #[builder(into)]
    pub author: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    /// Admin path of the subject.
    #[builder(into)]
    pub path: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Event {
    const SINGULAR: &'static str = "event";
    const PLURAL: &'static str = "events";
}
