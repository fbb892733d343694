//! Session error types.

use reeltrack_api::ApiError;
use reeltrack_storage::StorageError;
use thiserror::Error;

/// Error type for session-core operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Remote-service call failed (including credential rejection)
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Durable-storage fault (unexpected in browser context)
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid transition in the auth signal machine
    #[error("Invalid auth signal transition: {0}")]
    InvalidTransition(String),

    /// No session credential available
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Identity resolution returned a payload without a user id
    #[error("Identity response did not include a user id")]
    MissingIdentity,
}

impl SessionError {
    /// Returns true if the underlying cause was the service rejecting the
    /// session credential.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, SessionError::Api(e) if e.is_auth_rejection())
    }
}

/// Result type alias using SessionError.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_rejection_predicate() {
        let rejected = SessionError::Api(ApiError::Status {
            status: 401,
            body: "expired".to_string(),
        });
        assert!(rejected.is_auth_rejection());

        let server_error = SessionError::Api(ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        assert!(!server_error.is_auth_rejection());

        assert!(!SessionError::NotAuthenticated.is_auth_rejection());
        assert!(!SessionError::MissingIdentity.is_auth_rejection());
    }
}
