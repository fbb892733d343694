//! reqwest-based implementation of the remote service client.

use crate::{
    ApiError, ApiResult, AuthBackend, RegisterForm, UpdateUserProfileRequest, UserPreview,
    UserProfile, UserShort,
};
use async_trait::async_trait;
use reqwest::header;

/// HTTP client for the Reeltrack remote service.
///
/// The credential travels as the `access_token` cookie on protected
/// requests; that is the contract the service authenticates against.
#[derive(Clone)]
pub struct HttpBackend {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new client for the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build the full URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Cookie header value carrying the session credential.
    fn credential_cookie(token: &str) -> String {
        format!("access_token={}", token)
    }

    /// Convert a non-success response into an [`ApiError::Status`].
    async fn ensure_success(
        response: reqwest::Response,
        operation: &str,
    ) -> ApiResult<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = %status,
            operation = %operation,
            body_len = body.len(),
            "Request rejected by service"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    // ==========================================
    // User directory (view plumbing)
    // ==========================================

    /// Fetch the subscribers of a user.
    pub async fn subscribers(&self, id: &str, token: &str) -> ApiResult<Vec<UserPreview>> {
        let url = self.endpoint(&format!("users/{}/subscribers", id));
        let response = self
            .http_client
            .get(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        let response = Self::ensure_success(response, "subscribers").await?;
        Ok(response.json().await?)
    }

    /// Fetch the users a user subscribes to.
    pub async fn subscriptions(&self, id: &str, token: &str) -> ApiResult<Vec<UserPreview>> {
        let url = self.endpoint(&format!("users/{}/subscribes", id));
        let response = self
            .http_client
            .get(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        let response = Self::ensure_success(response, "subscriptions").await?;
        Ok(response.json().await?)
    }

    /// Subscribe the current user to another user.
    pub async fn subscribe(&self, id: &str, token: &str) -> ApiResult<()> {
        let url = self.endpoint(&format!("users/{}/subscribe", id));
        let response = self
            .http_client
            .post(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        Self::ensure_success(response, "subscribe").await?;
        Ok(())
    }

    /// Remove a subscription.
    pub async fn unsubscribe(&self, id: &str, token: &str) -> ApiResult<()> {
        let url = self.endpoint(&format!("users/{}/unsubscribe", id));
        let response = self
            .http_client
            .post(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        Self::ensure_success(response, "unsubscribe").await?;
        Ok(())
    }

    /// Search users by name.
    pub async fn search_users(&self, username: &str, token: &str) -> ApiResult<Vec<UserPreview>> {
        let url = self.endpoint("users/search");
        let response = self
            .http_client
            .get(&url)
            .query(&[("username", username)])
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        let response = Self::ensure_success(response, "search_users").await?;
        Ok(response.json().await?)
    }

    /// Update a user's profile.
    pub async fn update_profile(
        &self,
        id: &str,
        patch: &UpdateUserProfileRequest,
        token: &str,
    ) -> ApiResult<()> {
        let url = self.endpoint(&format!("users/{}", id));
        let response = self
            .http_client
            .put(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .json(patch)
            .send()
            .await?;
        Self::ensure_success(response, "update_profile").await?;
        Ok(())
    }
}

#[async_trait]
impl AuthBackend for HttpBackend {
    async fn login(&self, login: &str, password: &str) -> ApiResult<String> {
        let url = self.endpoint("auth/token");

        tracing::debug!(login = %login, "Attempting login");

        let response = self
            .http_client
            .post(&url)
            .query(&[("login", login), ("password", password)])
            .send()
            .await?;
        let response = Self::ensure_success(response, "login").await?;

        // The service returns either a bare token string or an object
        // carrying `access_token`.
        let payload: serde_json::Value = response.json().await?;
        match payload {
            serde_json::Value::String(token) => Ok(token),
            serde_json::Value::Object(ref map) => map
                .get("access_token")
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| {
                    ApiError::Decode("login response is missing access_token".to_string())
                }),
            other => Err(ApiError::Decode(format!(
                "unexpected login response shape: {}",
                other
            ))),
        }
    }

    async fn register(&self, login: &str, email: &str, password: &str) -> ApiResult<()> {
        let url = self.endpoint("auth/register");

        tracing::debug!(login = %login, "Registering account");

        let response = self
            .http_client
            .post(&url)
            .json(&RegisterForm {
                login: login.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Self::ensure_success(response, "register").await?;
        Ok(())
    }

    async fn current_user(&self, token: &str) -> ApiResult<UserShort> {
        let url = self.endpoint("users/current");

        let response = self
            .http_client
            .get(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        let response = Self::ensure_success(response, "current_user").await?;
        Ok(response.json().await?)
    }

    async fn user_by_id(&self, id: &str, token: &str) -> ApiResult<UserProfile> {
        let url = self.endpoint(&format!("users/{}", id));

        let response = self
            .http_client
            .get(&url)
            .header(header::COOKIE, Self::credential_cookie(token))
            .send()
            .await?;
        let response = Self::ensure_success(response, "user_by_id").await?;
        Ok(response.json().await?)
    }
}
