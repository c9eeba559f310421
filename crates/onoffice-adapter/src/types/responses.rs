/*
[INPUT]:  Decoded JSON response bodies
[OUTPUT]: ApiResponse wrapper with status and payload accessors
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new accessors are needed
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::error::status_code_of;

/// A successful API response, kept exactly as the server sent it.
///
/// The payload is read from the `response` key; the full body stays
/// available through [`ApiResponse::as_value`] and [`ApiResponse::into_inner`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Value);

impl ApiResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// `status.code`, if present
    pub fn status_code(&self) -> Option<i64> {
        status_code_of(&self.0)
    }

    /// `status.message`, if present
    pub fn status_message(&self) -> Option<&str> {
        self.0.pointer("/status/message").and_then(Value::as_str)
    }

    /// The `response` object
    pub fn payload(&self) -> Option<&Value> {
        self.0.get("response")
    }

    /// `response.data`
    pub fn data(&self) -> Option<&Value> {
        self.payload().and_then(|payload| payload.get("data"))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.0
    }
}
