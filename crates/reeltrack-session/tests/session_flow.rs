//! End-to-end session scenarios against a scripted backend.

use async_trait::async_trait;
use reeltrack_api::{ApiError, ApiResult, AuthBackend, UserProfile, UserShort};
use reeltrack_session::{
    auth_guard, AuthInterceptor, AuthService, AuthSignal, CurrentIdentity, ExecutionContext,
    GuardDecision, Navigator, Notifier, Route, SessionFlow, UserState, SESSION_EXPIRED_NOTICE,
};
use reeltrack_storage::{MemoryStorage, StateStorage, StorageKeys};
use std::sync::{Arc, Mutex};

/// Scripted remote service: each operation returns its configured outcome.
struct ScriptedBackend {
    login: Result<String, u16>,
    current_user: Result<UserShort, u16>,
    user_by_id: Result<UserProfile, u16>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn happy(token: &str, userid: &str, username: &str) -> Self {
        Self {
            login: Ok(token.to_string()),
            current_user: Ok(short(userid)),
            user_by_id: Ok(profile(userid, username)),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn short(userid: &str) -> UserShort {
    UserShort {
        userid: userid.to_string(),
        role: 0,
        status: 1,
    }
}

fn profile(userid: &str, username: &str) -> UserProfile {
    UserProfile {
        userid: userid.to_string(),
        role: 0,
        status: 1,
        username: username.to_string(),
        bio: None,
        location: None,
        birth_date: None,
        email: None,
        avatar: None,
    }
}

fn status_err(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: String::new(),
    }
}

#[async_trait]
impl AuthBackend for ScriptedBackend {
    async fn login(&self, _login: &str, _password: &str) -> ApiResult<String> {
        self.record("login");
        self.login.clone().map_err(status_err)
    }

    async fn register(&self, _login: &str, _email: &str, _password: &str) -> ApiResult<()> {
        self.record("register");
        Ok(())
    }

    async fn current_user(&self, _token: &str) -> ApiResult<UserShort> {
        self.record("current_user");
        self.current_user.clone().map_err(status_err)
    }

    async fn user_by_id(&self, id: &str, _token: &str) -> ApiResult<UserProfile> {
        self.record(&format!("user_by_id:{}", id));
        self.user_by_id.clone().map_err(status_err)
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

impl RecordingNavigator {
    fn recorded(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

impl RecordingNotifier {
    fn recorded(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

struct Harness {
    storage: Arc<MemoryStorage>,
    context: ExecutionContext,
    auth: Arc<AuthService>,
    user_state: Arc<UserState>,
    navigator: Arc<RecordingNavigator>,
    notifier: Arc<RecordingNotifier>,
    flow: SessionFlow,
}

fn boot(backend: ScriptedBackend, storage: Arc<MemoryStorage>) -> Harness {
    let context = ExecutionContext::browser();
    let auth = Arc::new(AuthService::new(storage.clone(), context.clone()));
    let user_state = Arc::new(UserState::new(storage.clone(), context.clone()));
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let interceptor = Arc::new(AuthInterceptor::new(
        auth.clone(),
        navigator.clone(),
        notifier.clone(),
    ));
    let flow = SessionFlow::new(
        Arc::new(backend),
        auth.clone(),
        user_state.clone(),
        navigator.clone(),
        interceptor,
    );

    Harness {
        storage,
        context,
        auth,
        user_state,
        navigator,
        notifier,
        flow,
    }
}

// Scenario A: fresh process, no stored credential.
#[tokio::test]
async fn fresh_boot_without_credential_denies_protected_route() {
    let h = boot(
        ScriptedBackend::happy("abc123", "u1", "Alice"),
        Arc::new(MemoryStorage::new()),
    );

    assert_eq!(h.auth.token().unwrap(), None);
    assert_eq!(h.auth.signal(), AuthSignal::NotAuthenticated);

    let decision = auth_guard(&h.context, &h.auth).await;
    assert_eq!(decision, GuardDecision::Redirect(Route::Login));
}

// Scenario B: successful login resolves identity and navigates to /plane.
#[tokio::test]
async fn login_resolves_identity_and_enters_plane() {
    let h = boot(
        ScriptedBackend::happy("abc123", "u1", "Alice"),
        Arc::new(MemoryStorage::new()),
    );

    h.flow.login("alice", "pw").await.unwrap();

    assert_eq!(h.auth.token().unwrap(), Some("abc123".to_string()));
    assert_eq!(h.auth.signal(), AuthSignal::Authenticated);
    assert_eq!(
        h.user_state.current(),
        CurrentIdentity {
            id: Some("u1".to_string()),
            display_name: Some("Alice".to_string()),
        }
    );
    assert_eq!(h.navigator.recorded(), vec![Route::Plane]);

    let decision = auth_guard(&h.context, &h.auth).await;
    assert_eq!(decision, GuardDecision::Allow);
}

#[tokio::test]
async fn login_sequence_is_strictly_ordered() {
    let backend = ScriptedBackend::happy("abc123", "u1", "Alice");
    let storage = Arc::new(MemoryStorage::new());
    let context = ExecutionContext::browser();
    let auth = Arc::new(AuthService::new(storage.clone(), context.clone()));
    let user_state = Arc::new(UserState::new(storage, context));
    let navigator = Arc::new(RecordingNavigator::default());
    let interceptor = Arc::new(AuthInterceptor::new(
        auth.clone(),
        navigator.clone(),
        Arc::new(RecordingNotifier::default()),
    ));
    let backend = Arc::new(backend);
    let flow = SessionFlow::new(
        backend.clone(),
        auth,
        user_state,
        navigator,
        interceptor,
    );

    flow.login("alice", "pw").await.unwrap();

    assert_eq!(
        backend.calls(),
        vec![
            "login".to_string(),
            "current_user".to_string(),
            "user_by_id:u1".to_string(),
        ]
    );
}

// Rejected credentials at the login step abort before anything is stored.
#[tokio::test]
async fn failed_login_stores_nothing() {
    let h = boot(
        ScriptedBackend {
            login: Err(401),
            current_user: Ok(short("u1")),
            user_by_id: Ok(profile("u1", "Alice")),
            calls: Mutex::new(Vec::new()),
        },
        Arc::new(MemoryStorage::new()),
    );

    let err = h.flow.login("alice", "wrong").await.unwrap_err();
    assert!(err.is_auth_rejection());

    assert_eq!(h.auth.token().unwrap(), None);
    assert_eq!(h.user_state.current(), CurrentIdentity::anonymous());
    // No navigation to the main view; the interceptor's own redirect to
    // login is the only recorded route.
    assert!(!h.navigator.recorded().contains(&Route::Plane));
}

// A failure after the credential committed keeps the credential: it is
// valid even though the profile fetch failed transiently.
#[tokio::test]
async fn profile_fetch_failure_aborts_without_identity_mutation() {
    let h = boot(
        ScriptedBackend {
            login: Ok("abc123".to_string()),
            current_user: Ok(short("u1")),
            user_by_id: Err(500),
            calls: Mutex::new(Vec::new()),
        },
        Arc::new(MemoryStorage::new()),
    );

    let result = h.flow.login("alice", "pw").await;
    assert!(result.is_err());

    assert_eq!(h.auth.token().unwrap(), Some("abc123".to_string()));
    assert_eq!(h.auth.signal(), AuthSignal::Authenticated);
    assert_eq!(h.user_state.current(), CurrentIdentity::anonymous());
    assert!(h.navigator.recorded().is_empty());
    assert!(h.notifier.recorded().is_empty());
}

#[tokio::test]
async fn identity_fetch_failure_aborts_remaining_steps() {
    let h = boot(
        ScriptedBackend {
            login: Ok("abc123".to_string()),
            current_user: Err(500),
            user_by_id: Ok(profile("u1", "Alice")),
            calls: Mutex::new(Vec::new()),
        },
        Arc::new(MemoryStorage::new()),
    );

    let result = h.flow.login("alice", "pw").await;
    assert!(result.is_err());

    // The chain stopped at the failed step.
    assert_eq!(h.user_state.current(), CurrentIdentity::anonymous());
    assert!(!h.navigator.recorded().contains(&Route::Plane));
}

// Scenario C: a protected request is rejected mid-session.
#[tokio::test]
async fn rejected_request_mid_session_locks_out_protected_routes() {
    let h = boot(
        ScriptedBackend::happy("abc123", "u1", "Alice"),
        Arc::new(MemoryStorage::new()),
    );
    h.flow.login("alice", "pw").await.unwrap();

    // Some view issues a protected request; the service answers 401.
    let outcome: Result<(), _> = h
        .flow
        .interceptor()
        .inspect(Err::<(), _>(status_err(401)));
    assert!(outcome.is_err());

    assert_eq!(
        h.navigator.recorded(),
        vec![Route::Plane, Route::Login]
    );
    assert_eq!(
        h.notifier.recorded(),
        vec![SESSION_EXPIRED_NOTICE.to_string()]
    );

    // Credential cleared, so the guard denies re-entry to the previous
    // protected route.
    let decision = auth_guard(&h.context, &h.auth).await;
    assert_eq!(decision, GuardDecision::Redirect(Route::Login));
}

// Scenario D: the durable mirror repopulates the identity cache at boot.
#[tokio::test]
async fn stored_identity_mirror_seeds_first_emission() {
    let storage = Arc::new(MemoryStorage::new());
    storage.set(StorageKeys::ACCESS_TOKEN, "abc123").unwrap();
    storage.set(StorageKeys::CURRENT_USER_ID, "u9").unwrap();
    storage.set(StorageKeys::CURRENT_USER_NAME, "Bob").unwrap();

    let h = boot(ScriptedBackend::happy("abc123", "u9", "Bob"), storage);

    // Before any network call: the header already has someone to show.
    assert_eq!(
        h.user_state.current(),
        CurrentIdentity {
            id: Some("u9".to_string()),
            display_name: Some("Bob".to_string()),
        }
    );
    assert_eq!(h.auth.signal(), AuthSignal::Authenticated);
}

#[tokio::test]
async fn register_navigates_to_login_without_storing_a_session() {
    let h = boot(
        ScriptedBackend::happy("abc123", "u1", "Alice"),
        Arc::new(MemoryStorage::new()),
    );

    h.flow.register("alice", "alice@example.com", "pw").await.unwrap();

    assert_eq!(h.navigator.recorded(), vec![Route::Login]);
    assert_eq!(h.auth.token().unwrap(), None);
    assert_eq!(h.auth.signal(), AuthSignal::NotAuthenticated);
}

#[tokio::test]
async fn logout_after_login_denies_reentry() {
    let h = boot(
        ScriptedBackend::happy("abc123", "u1", "Alice"),
        Arc::new(MemoryStorage::new()),
    );
    h.flow.login("alice", "pw").await.unwrap();

    h.flow.logout().unwrap();

    assert_eq!(h.auth.signal(), AuthSignal::NotAuthenticated);
    assert_eq!(h.user_state.current(), CurrentIdentity::anonymous());
    assert_eq!(h.storage.get(StorageKeys::ACCESS_TOKEN).unwrap(), None);

    let decision = auth_guard(&h.context, &h.auth).await;
    assert_eq!(decision, GuardDecision::Redirect(Route::Login));
}

// The server pre-render pass: guard bypass plus untouched storage.
#[tokio::test]
async fn server_pass_allows_protected_routes_and_mutates_nothing() {
    let storage = Arc::new(MemoryStorage::new());
    let context = ExecutionContext::server();
    let auth = Arc::new(AuthService::new(storage.clone(), context.clone()));

    assert_eq!(auth.signal(), AuthSignal::NotAuthenticated);
    assert_eq!(auth_guard(&context, &auth).await, GuardDecision::Allow);

    auth.set_token("abc123").unwrap();
    assert_eq!(storage.get(StorageKeys::ACCESS_TOKEN).unwrap(), None);
}
