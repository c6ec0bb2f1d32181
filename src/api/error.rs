//! API Error Types
//!
//! Errors produced while talking to the PhonePro API, plus the rules for
//! turning a server `detail` payload into the text shown to the user.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Non-success HTTP status. `body` is the parsed JSON body, or an empty
    /// object when the body was not valid JSON.
    #[error("Request failed ({status}): {body}")]
    Rejected { status: u16, body: Value },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build a rejection from a status code and the raw response text
    pub fn rejected(status: u16, text: &str) -> Self {
        Self::Rejected {
            status,
            body: parse_body(text),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's `detail` field, if the response carried a truthy one.
    /// `null`, `false`, `0` and `""` count as missing; any object or array
    /// is present, even when empty.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::Rejected { body, .. } => body.get("detail").filter(|d| is_truthy(d)),
            _ => None,
        }
    }

    /// Text shown by the login and signup forms.
    ///
    /// A string detail is shown verbatim, any other detail or a non-empty
    /// body is shown as JSON. `failed` covers an empty rejection and
    /// `errored` a transport failure without a reason.
    pub fn auth_message(&self, failed: &str, errored: &str) -> String {
        match self {
            Self::Rejected { body, .. } => match self.detail() {
                Some(Value::String(detail)) => detail.clone(),
                Some(detail) => detail.to_string(),
                None if !is_blank(body) => body.to_string(),
                None => failed.to_string(),
            },
            Self::Transport(reason) | Self::Decode(reason) => non_empty_or(reason, errored),
        }
    }

    /// Text shown by the recommendation panel.
    ///
    /// Structured validation details are stringified behind an
    /// "Invalid input. " prefix.
    pub fn recommend_message(&self) -> String {
        match self {
            Self::Rejected { .. } => match self.detail() {
                Some(Value::String(detail)) => detail.clone(),
                Some(detail) => format!("Invalid input. {}", detail),
                None => "Recommendation failed.".to_string(),
            },
            Self::Transport(reason) | Self::Decode(reason) => {
                non_empty_or(reason, "Recommendation error.")
            }
        }
    }
}

/// Parse a response body, substituting an empty object when it is not JSON
pub fn parse_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Decode a success body whose shape only matters for display; unreadable
/// bodies become the empty value.
pub fn decode_lenient<T: DeserializeOwned + Default>(text: &str) -> T {
    serde_json::from_str(text).unwrap_or_default()
}

/// Decode a success body the caller depends on
pub fn decode_strict<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn non_empty_or(reason: &str, fallback: &str) -> String {
    if reason.is_empty() {
        fallback.to_string()
    } else {
        reason.to_string()
    }
}
