//! Navigation guards for the protected and browser-only route groups.

use crate::auth::AuthService;
use crate::auth_fsm::AuthSignal;
use crate::context::ExecutionContext;
use crate::nav::Route;
use tokio::sync::watch;
use tracing::debug;

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Activate the requested route.
    Allow,
    /// Deny and send the pending navigation elsewhere.
    Redirect(Route),
    /// Deny without a redirect (route simply does not resolve).
    Block,
}

impl GuardDecision {
    /// Returns true if the route may activate.
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Guard for the protected route group.
///
/// Server pass: always allowed — the real decision is deferred to the
/// browser re-evaluation after hydration, since it depends on
/// browser-only storage.
///
/// Browser pass: waits for the first terminal auth signal (a decision is
/// never made on `Unknown`), then allows on `Authenticated` or redirects
/// the pending navigation to the login view.
pub async fn auth_guard(context: &ExecutionContext, auth: &AuthService) -> GuardDecision {
    if !context.is_browser() {
        debug!("auth_guard: server pass, bypassing");
        return GuardDecision::Allow;
    }

    let authenticated = first_terminal(auth.subscribe()).await.is_authenticated();

    debug!(authenticated, "auth_guard: terminal signal received");
    if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

/// Wait for the first terminal signal on the channel, skipping `Unknown`.
async fn first_terminal(mut rx: watch::Receiver<AuthSignal>) -> AuthSignal {
    match rx.wait_for(|signal| signal.is_terminal()).await {
        Ok(signal) => *signal,
        // Publisher gone means the service graph is tearing down; treat as
        // unauthenticated.
        Err(_) => AuthSignal::NotAuthenticated,
    }
}

/// Guard for the login/register views.
///
/// Those views depend on browser-only identity state, so the server
/// pre-render pass must never resolve them (this also prevents a flash of
/// the login page during server rendering).
pub fn browser_guard(context: &ExecutionContext) -> GuardDecision {
    if context.is_browser() {
        GuardDecision::Allow
    } else {
        GuardDecision::Block
    }
}
