//! # Common Error Types
//!
//! Consolidated error handling for the portal client.
//!
//! Every client operation returns [`Result<T>`], so callers handle one error
//! type regardless of which endpoint they hit.
//!
//! ## Error Categories
//!
//! - **Network**: transport failures (connection refused, DNS, timeout)
//! - **Status**: the server answered with a non-success status; carries the
//!   status code and the server's `error` message when it sent one
//! - **Decode**: a success response whose body did not match the expected shape
//! - **Config**: invalid client configuration (bad base URL)
//! - **Validation**: a pre-submit check from [`crate::utils::validation`] failed
//!
//! A lookup for a record that does not exist is *not* an error: `get_student`
//! and `get_course` return `Ok(None)`.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use portal_client::core::error::ApiError;
//!
//! let err = ApiError::Status { status: 409, message: "Already enrolled".to_string() };
//! assert_eq!(err.to_string(), "Already enrolled (HTTP 409)");
//! assert_eq!(err.status(), Some(409));
//! assert!(err.is_client_error());
//! ```

use thiserror::Error;

use crate::utils::validation::ValidationError;

/// Error type shared by every [`crate::ApiClient`] operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server rejected the request.
    ///
    /// `message` is the server-supplied `error` field verbatim, or a generic
    /// per-operation message when the body carried none.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// A success response whose body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ApiError {
    /// HTTP status of a server rejection, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a user-facing notification.
    ///
    /// For server rejections this is the server's message without the status
    /// suffix.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Validation(err) => err.message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// True for failures where nothing reached the server or came back.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(err.to_string())
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
