//! API error types.

use thiserror::Error;

/// Error type for remote-service operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The service answered 2xx but the payload did not decode
    #[error("Invalid response payload: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Returns true if the service rejected the session credential.
    ///
    /// This is the condition that triggers the route interceptor's
    /// redirect-and-notify side effect.
    pub fn is_auth_rejection(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;
