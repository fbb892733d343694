//! Request and response types for the remote service.

use serde::{Deserialize, Serialize};

/// Registration form fields.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub login: String,
    pub email: String,
    pub password: String,
}

/// Short identity of the signed-in user, as returned by `users/current`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserShort {
    /// User id
    pub userid: String,
    /// Role level
    pub role: i32,
    /// Account status
    pub status: i32,
}

/// Full user profile, as returned by `users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub userid: String,
    pub role: i32,
    pub status: i32,
    /// Display name shown in the header and profile views
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Compact user row for subscriber/subscription/search listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreview {
    pub userid: String,
    pub role: i32,
    pub status: i32,
    pub username: String,
    #[serde(default)]
    pub subscribers_count: i64,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Profile-update payload for `PUT users/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUserProfileRequest {
    pub userid: String,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub birth_date: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub status: i32,
}
