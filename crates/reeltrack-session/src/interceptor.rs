//! Route interceptor for credential-rejection responses.

use crate::auth::AuthService;
use crate::nav::{Navigator, Notifier, Route};
use crate::{SessionError, SessionResult};
use reeltrack_api::ApiResult;
use std::sync::Arc;
use tracing::warn;

/// Notification shown when the service rejects the session credential.
pub const SESSION_EXPIRED_NOTICE: &str = "Your session has expired. Please sign in again.";

/// Inspects every remote-operation outcome.
///
/// On a credential-rejection response it redirects the pending navigation
/// to the login view, emits a user-visible notification, and clears the
/// stored credential so the next guard evaluation denies re-entry. The
/// original failure is always re-raised to the caller unchanged — the
/// interceptor augments with side effects, it never swallows.
pub struct AuthInterceptor {
    auth: Arc<AuthService>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl AuthInterceptor {
    /// Create an interceptor over the given seams.
    pub fn new(
        auth: Arc<AuthService>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            auth,
            navigator,
            notifier,
        }
    }

    /// Pass a remote-operation outcome through the interceptor.
    pub fn inspect<T>(&self, result: ApiResult<T>) -> SessionResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(error) => {
                if error.is_auth_rejection() {
                    warn!("Credential rejected by service, redirecting to login");
                    self.navigator.navigate(Route::Login);
                    self.notifier.notify(SESSION_EXPIRED_NOTICE);

                    // The rejected credential is dead weight; leaving it in
                    // storage would keep the auth signal claiming a session
                    // the server no longer honors.
                    if let Err(clear_error) = self.auth.clear_token() {
                        warn!(error = %clear_error, "Failed to clear rejected credential");
                    }
                }
                Err(SessionError::Api(error))
            }
        }
    }
}
