//! API failure taxonomy shared by every gateway.
//!
//! One discriminated type instead of probing nested optional fields at
//! every call site: the transport adapter classifies each failure once,
//! and consumers branch on the kind.
//!
//! # Contract
//!
//! - `Unauthorized` forces a local logout; it is never rendered inline.
//!   It still carries the server message because the login endpoint
//!   answers invalid credentials with a 401 body worth showing.
//! - `NotFound` on a mutation is a benign desync signal: the caller shows
//!   an informational notice and reloads the authoritative list.
//! - Everything else surfaces through [`ApiError::user_message`].

use thiserror::Error;

/// Failure of a backend API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 - session missing or expired, or credentials rejected.
    #[error("Unauthorized")]
    Unauthorized { message: Option<String> },

    /// 404 - the resource is already gone server-side.
    #[error("Not found")]
    NotFound,

    /// Any other non-success status, with the body's message when present.
    #[error("API error {status}")]
    Api { status: u16, message: Option<String> },

    /// The request exceeded the configured client timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure before a status was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Creates an unauthorized error without a server message.
    pub fn unauthorized() -> Self {
        ApiError::Unauthorized { message: None }
    }

    /// Creates an API error for the given status.
    pub fn api(status: u16, message: Option<String>) -> Self {
        ApiError::Api { status, message }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network(message.into())
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode(message.into())
    }

    /// True for 401 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// True for 404 responses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// The message to show the user: the server-provided one when the
    /// response carried a body message, the given fallback otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { message } | ApiError::Api { message, .. } => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            _ => fallback.to_string(),
        }
    }
}
