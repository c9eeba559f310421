/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - envelope, action and parameter shapes
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A JSON object used as create/update payload
pub type Record = serde_json::Map<String, Value>;

/// One signed action inside an envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    #[serde(rename = "actionid")]
    pub action_id: String,
    #[serde(rename = "resourceid")]
    pub resource_id: String,
    #[serde(rename = "resourcetype")]
    pub resource_type: String,
    pub identifier: String,
    pub timestamp: i64,
    pub hmac: String,
    pub hmac_version: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionBatch {
    pub actions: Vec<ActionRequest>,
}

/// Outer request body: `{"token": ..., "request": {"actions": [...]}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub token: String,
    pub request: ActionBatch,
}

/// A single `{op, val}` predicate. Operators are passed through unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub op: String,
    pub val: Value,
}

impl Condition {
    pub fn new(op: impl Into<String>, val: impl Into<Value>) -> Self {
        Self {
            op: op.into(),
            val: val.into(),
        }
    }

    pub fn equals(val: impl Into<Value>) -> Self {
        Self::new("=", val)
    }

    pub fn less_than(val: impl Into<Value>) -> Self {
        Self::new("<", val)
    }

    pub fn greater_than(val: impl Into<Value>) -> Self {
        Self::new(">", val)
    }
}

/// Field name to list of conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(pub BTreeMap<String, Vec<Condition>>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching a single record id
    pub fn by_id(id: u64) -> Self {
        Self::new().with("Id", Condition::equals(id))
    }

    /// Append a condition for `field`
    pub fn with(mut self, field: impl Into<String>, condition: Condition) -> Self {
        self.0.entry(field.into()).or_default().push(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Caller-facing options for `search`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub fields: Option<Vec<String>>,
    pub filter: Option<Filter>,
    pub limit: u32,
    pub offset: u32,
    pub sort_by: Option<BTreeMap<String, String>>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            fields: None,
            filter: None,
            limit: 100,
            offset: 0,
            sort_by: None,
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Sort by `field`; `order` is a [`SortOrder`](super::SortOrder) or any
    /// direction string the API accepts
    pub fn sort_by(mut self, field: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort_by
            .get_or_insert_with(BTreeMap::new)
            .insert(field.into(), order.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParameters {
    pub data: Vec<String>,
    pub listlimit: u32,
    pub listoffset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortby: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetParameters {
    pub data: Vec<String>,
    pub filter: Filter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordParameters {
    pub data: Record,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRef {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elements {
    pub elements: Vec<ElementRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteParameters {
    pub data: Elements,
}
