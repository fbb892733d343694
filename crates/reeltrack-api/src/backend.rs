//! Remote-service trait for the session core.

use crate::{ApiResult, UserProfile, UserShort};
use async_trait::async_trait;

/// The fixed set of remote operations the session core consumes.
///
/// The remote service is an opaque collaborator: the core only knows these
/// request/response pairs. Protected operations take the session credential
/// explicitly; the caller requests it from the token store on demand.
/// Nothing here retries — failures surface to the caller unchanged.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange login and password for an opaque session token.
    async fn login(&self, login: &str, password: &str) -> ApiResult<String>;

    /// Create a new account.
    async fn register(&self, login: &str, email: &str, password: &str) -> ApiResult<()>;

    /// Fetch the short identity of the user the credential belongs to.
    async fn current_user(&self, token: &str) -> ApiResult<UserShort>;

    /// Fetch the full profile (including display name) for a user id.
    async fn user_by_id(&self, id: &str, token: &str) -> ApiResult<UserProfile>;
}
