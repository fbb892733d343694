//! HTTP client for the Reeltrack remote service.
//!
//! This crate presents the remote service as an opaque collaborator behind
//! the [`AuthBackend`] trait: login, register, and the two identity-fetch
//! operations the session core depends on. [`HttpBackend`] is the real
//! implementation; tests script the trait directly.
//!
//! User-directory operations (subscribers, subscriptions, search, profile
//! updates) live on [`HttpBackend`] as inherent methods — they ride the
//! same client and error surface but are plumbing for views, not part of
//! the session core's contract.

mod backend;
mod error;
mod http;
mod types;

pub use backend::AuthBackend;
pub use error::{ApiError, ApiResult};
pub use http::HttpBackend;
pub use types::{RegisterForm, UpdateUserProfileRequest, UserPreview, UserProfile, UserShort};
