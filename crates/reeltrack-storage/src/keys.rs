//! Storage key constants.

/// Storage keys used by the session core.
///
/// Three independent scalar string entries; no schema versioning. Absence
/// of an entry is treated as "no session".
pub struct StorageKeys;

impl StorageKeys {
    /// Opaque bearer credential for the authenticated session
    pub const ACCESS_TOKEN: &'static str = "access_token";

    /// Current user's id (mirror of the identity cache)
    pub const CURRENT_USER_ID: &'static str = "current_user_id";

    /// Current user's display name (mirror of the identity cache)
    pub const CURRENT_USER_NAME: &'static str = "current_user_name";
}
