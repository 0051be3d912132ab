use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_ERROR: &str = "UNKNOWN";
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";
pub const UNRECOGNIZED_ERROR: &str = "UNRECOGNIZED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merchant {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub merchant: Merchant,
}

/// Error envelope returned by the backend (`{"error": "...", "code": "..."}`).
///
/// Also used for failures produced on the client side so that views only
/// ever deal with one error type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: UNKNOWN_ERROR.to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: REQUEST_FAILED.to_string(),
            details: None,
        }
    }

    /// A failure response whose body was not an error envelope.
    pub fn unrecognized(status: u16) -> Self {
        Self {
            error: String::new(),
            code: UNRECOGNIZED_ERROR.to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    /// True when the error carries a message fit to show to the user.
    pub fn is_recognized(&self) -> bool {
        self.code != UNRECOGNIZED_ERROR && !self.error.trim().is_empty()
    }
}
