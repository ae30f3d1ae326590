//! Authentication operations: the only typed functions that touch session
//! state.

use envelope::Envelope;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AckEnvelope, ApiClient};
use crate::domain::resources::AdminUser;
use crate::domain::{ApiError, ApiResult, SessionToken};

/// Payload returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// The authenticated administrator.
    pub user: AdminUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Authenticate and persist the returned token and user record.
    ///
    /// This is the one typed function permitted to mutate session state on
    /// success. A login whose session cannot be persisted is reported as a
    /// failure, with the session left cleared rather than half-written.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid credentials, an unreachable
    /// backend, or a session that could not be persisted.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Envelope<LoginPayload>> {
        let response: Envelope<LoginPayload> = self
            .post_json("auth/login", &LoginRequest { email, password })
            .await?;

        let token = SessionToken::new(response.data.token.clone())
            .map_err(|error| ApiError::new(format!("login returned an unusable token: {error}")))?;
        self.session()
            .persist(&token, &response.data.user)
            .map_err(|error| {
                ApiError::new(format!("login succeeded but the session could not be saved: {error}"))
            })?;
        Ok(response)
    }

    /// End the session on the backend and clear the persisted session.
    ///
    /// The persisted token and user record are cleared on every exit path,
    /// whether or not the logout request itself succeeds; clearing is
    /// best-effort and never turns a successful logout into a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the logout request fails; the local
    /// session is cleared regardless.
    pub async fn logout(&self) -> ApiResult<AckEnvelope> {
        let result = self.post_empty("auth/logout").await;
        if let Err(error) = self.session().clear() {
            warn!(error = %error, "failed to clear the persisted session during logout");
        }
        result
    }

    /// Fetch the administrator the current token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request fails.
    pub async fn current_user(&self) -> ApiResult<Envelope<AdminUser>> {
        self.get_json("auth/me", Vec::new()).await
    }
}
