//! Service-graph construction for the shell.

use crate::auth::AuthService;
use crate::context::ExecutionContext;
use crate::flow::SessionFlow;
use crate::identity::UserState;
use crate::interceptor::AuthInterceptor;
use crate::nav::{Navigator, Notifier};
use crate::SessionResult;
use reeltrack_api::HttpBackend;
use reeltrack_core::{Config, Paths};
use reeltrack_storage::{FileStorage, MemoryStorage, StateStorage};
use std::sync::Arc;
use tracing::info;

/// The constructed session service graph.
///
/// Built once per process; every view reaches the same instances. The
/// ordering guarantee of the core rests on this: the auth signal is
/// already terminal when `bootstrap` returns, before any guard can run.
pub struct SessionServices {
    pub context: ExecutionContext,
    pub auth: Arc<AuthService>,
    pub user_state: Arc<UserState>,
    pub interceptor: Arc<AuthInterceptor>,
    pub flow: SessionFlow,
}

/// Wire up the session core for the given execution context.
///
/// Browser pass: durable storage backed by the state file. Server pass:
/// an in-memory store, since browser storage does not exist there and the
/// credential (if any) arrives via inbound-request cookies.
pub fn bootstrap(
    config: &Config,
    paths: &Paths,
    context: ExecutionContext,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
) -> SessionResult<SessionServices> {
    info!(
        api_base_url = %config.api_base_url,
        platform = ?context.platform(),
        "Configuration loaded"
    );

    let storage: Arc<dyn StateStorage> = if context.is_browser() {
        Arc::new(FileStorage::open(paths.state_file())?)
    } else {
        Arc::new(MemoryStorage::new())
    };

    let auth = Arc::new(AuthService::new(storage.clone(), context.clone()));
    let user_state = Arc::new(UserState::new(storage, context.clone()));

    let backend = Arc::new(HttpBackend::new(config.api_base_url.clone()));
    let interceptor = Arc::new(AuthInterceptor::new(
        auth.clone(),
        navigator.clone(),
        notifier,
    ));
    let flow = SessionFlow::new(
        backend,
        auth.clone(),
        user_state.clone(),
        navigator,
        interceptor.clone(),
    );

    info!(signal = ?auth.signal(), "Session core initialized");

    Ok(SessionServices {
        context,
        auth,
        user_state,
        interceptor,
        flow,
    })
}
