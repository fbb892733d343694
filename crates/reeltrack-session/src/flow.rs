//! Login, registration, and logout flows.

use crate::auth::AuthService;
use crate::identity::UserState;
use crate::interceptor::AuthInterceptor;
use crate::nav::{Navigator, Route};
use crate::{SessionError, SessionResult};
use reeltrack_api::AuthBackend;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates the session lifecycle against the remote service.
///
/// The identity-resolution sequence is a strictly ordered chain — each
/// step depends on the previous step's result and the first failure aborts
/// the rest. A failure after the credential has been stored leaves the
/// credential in place: it is valid even if the profile fetch failed
/// transiently.
pub struct SessionFlow {
    backend: Arc<dyn AuthBackend>,
    auth: Arc<AuthService>,
    user_state: Arc<UserState>,
    navigator: Arc<dyn Navigator>,
    interceptor: Arc<AuthInterceptor>,
}

impl SessionFlow {
    /// Create a flow over the shared services and seams.
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        auth: Arc<AuthService>,
        user_state: Arc<UserState>,
        navigator: Arc<dyn Navigator>,
        interceptor: Arc<AuthInterceptor>,
    ) -> Self {
        Self {
            backend,
            auth,
            user_state,
            navigator,
            interceptor,
        }
    }

    /// Sign in and resolve the current identity.
    ///
    /// Sequence: login → store credential → fetch short identity → fetch
    /// full profile → publish identity → navigate to the main view.
    pub async fn login(&self, login: &str, password: &str) -> SessionResult<()> {
        info!(login = %login, "Login attempt");

        let token = self
            .interceptor
            .inspect(self.backend.login(login, password).await)?;
        self.auth.set_token(&token)?;

        let credential = self.auth.token()?.ok_or(SessionError::NotAuthenticated)?;

        let short = self
            .interceptor
            .inspect(self.backend.current_user(&credential).await)?;
        if short.userid.is_empty() {
            warn!("Short identity response carried an empty user id");
            return Err(SessionError::MissingIdentity);
        }

        let profile = self
            .interceptor
            .inspect(self.backend.user_by_id(&short.userid, &credential).await)?;

        self.user_state
            .set_current_user(&short.userid, &profile.username)?;

        info!(user_id = %short.userid, "Login complete");
        self.navigator.navigate(Route::Plane);
        Ok(())
    }

    /// Create an account, then send the user to the login view.
    pub async fn register(&self, login: &str, email: &str, password: &str) -> SessionResult<()> {
        info!(login = %login, "Registration attempt");

        self.interceptor
            .inspect(self.backend.register(login, email, password).await)?;

        self.navigator.navigate(Route::Login);
        Ok(())
    }

    /// Clear the credential and identity cache, then send the user to the
    /// login view.
    pub fn logout(&self) -> SessionResult<()> {
        self.auth.clear_token()?;
        self.user_state.clear_user()?;
        self.navigator.navigate(Route::Login);

        info!("Logged out");
        Ok(())
    }

    /// The interceptor, for views issuing their own protected requests.
    pub fn interceptor(&self) -> &Arc<AuthInterceptor> {
        &self.interceptor
    }
}
