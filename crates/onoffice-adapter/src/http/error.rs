/*
[INPUT]:  Error sources (transport, API status block, serialization, config)
[OUTPUT]: Structured error types with attached response context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or new status code classes
*/

use serde_json::Value;
use thiserror::Error;

/// Main error type for the onOffice adapter
#[derive(Error, Debug)]
pub enum OnOfficeError {
    /// Transport failure or non-2xx HTTP status
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API reported status code 401
    #[error("Authentication failed: {message}")]
    Authentication { message: String, response: Value },

    /// API reported status code 429
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        reset_time: Option<Value>,
    },

    /// API reported status code 400
    #[error("Validation failed: {message}")]
    Validation { message: String, errors: Value },

    /// API reported any other non-200 status code
    #[error("API error: {message}")]
    Api {
        code: Option<i64>,
        message: String,
        response: Value,
    },

    /// Response body was not valid JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OnOfficeError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, OnOfficeError::Authentication { .. })
    }

    /// Rate limit reset time exactly as the API sent it
    pub fn reset_time(&self) -> Option<&Value> {
        match self {
            OnOfficeError::RateLimit { reset_time, .. } => reset_time.as_ref(),
            _ => None,
        }
    }

    /// Reset time as whole seconds, when the raw value is numeric
    pub fn reset_time_secs(&self) -> Option<u64> {
        match self.reset_time()? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The `status.code` the API answered with, for classified API errors
    pub fn status_code(&self) -> Option<i64> {
        match self {
            OnOfficeError::Authentication { .. } => Some(401),
            OnOfficeError::RateLimit { .. } => Some(429),
            OnOfficeError::Validation { .. } => Some(400),
            OnOfficeError::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Classify a decoded response body whose `status.code` is not 200
    pub fn from_status(response: Value) -> Self {
        let status = response.get("status").cloned().unwrap_or(Value::Null);
        let code = status_code_of(&response);

        match code {
            Some(401) => OnOfficeError::Authentication {
                message: "Authentication failed".to_string(),
                response,
            },
            Some(429) => OnOfficeError::RateLimit {
                message: "Rate limit exceeded".to_string(),
                reset_time: status.get("reset_time").filter(|v| !v.is_null()).cloned(),
            },
            Some(400) => OnOfficeError::Validation {
                message: "Validation failed".to_string(),
                errors: match status.get("errors") {
                    Some(errors) if !errors.is_null() => errors.clone(),
                    _ => Value::Object(Default::default()),
                },
            },
            _ => OnOfficeError::Api {
                code,
                message: status
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
                response,
            },
        }
    }
}

/// `status.code` of a response body; integral floats such as `200.0` count
pub fn status_code_of(body: &Value) -> Option<i64> {
    let code = body.pointer("/status/code")?;
    code.as_i64().or_else(|| {
        code.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Result type alias for onOffice operations
pub type Result<T> = std::result::Result<T, OnOfficeError>;
