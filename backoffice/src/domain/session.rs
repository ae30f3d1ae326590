//! Session context: the one piece of mutable client state.
//!
//! Rather than ambient global storage access, the session is an explicit
//! object handed to the HTTP client at construction. Its lifecycle is
//! narrow: created at application start, written once on login, cleared on
//! logout. Read failures degrade to "no session" so requests proceed
//! unauthenticated; write failures are returned to the caller.

use std::sync::Arc;

use tracing::warn;
use zeroize::Zeroize;

use crate::domain::ports::{KeyValueStore, KeyValueStoreError};
use crate::domain::resources::AdminUser;

/// Storage key holding the opaque session token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key holding the serialized current-user record.
pub const AUTH_USER_KEY: &str = "auth_user";

/// Validation failures raised when constructing a [`SessionToken`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionTokenValidationError {
    /// A blank token can never authenticate a request.
    #[error("session token must not be empty")]
    EmptyToken,
}

/// Opaque bearer token issued by the backend on login.
///
/// The token is zeroized on drop and redacted from debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Validate and wrap a raw token string.
    ///
    /// # Errors
    ///
    /// Returns [`SessionTokenValidationError::EmptyToken`] when the token is
    /// empty after trimming.
    pub fn new(raw: impl Into<String>) -> Result<Self, SessionTokenValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SessionTokenValidationError::EmptyToken);
        }
        Ok(Self(raw))
    }

    /// Reveal the raw token for the authorization header.
    #[must_use]
    pub fn reveal(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

impl Drop for SessionToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Errors raised while persisting a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionPersistError {
    /// The profile store rejected the write.
    #[error(transparent)]
    Storage(#[from] KeyValueStoreError),
    /// The current-user record could not be serialized.
    #[error("failed to serialize the current user record: {message}")]
    Serialize {
        /// Serializer diagnostic.
        message: String,
    },
}

/// Explicit session object injected into the HTTP client.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
}

impl SessionContext {
    /// Create a session context over the given profile store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the token and current-user record returned by a successful
    /// login.
    ///
    /// The token is written last so a partial failure never leaves a token
    /// without its user record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionPersistError`] when serialization or the store
    /// write fails; a failed persist leaves the session cleared rather than
    /// half-written.
    pub fn persist(&self, token: &SessionToken, user: &AdminUser) -> Result<(), SessionPersistError> {
        let serialized =
            serde_json::to_string(user).map_err(|error| SessionPersistError::Serialize {
                message: error.to_string(),
            })?;
        let written = self
            .store
            .set(AUTH_USER_KEY, &serialized)
            .and_then(|()| self.store.set(AUTH_TOKEN_KEY, token.reveal()));
        if let Err(error) = written {
            if let Err(cleanup) = self.clear() {
                warn!(error = %cleanup, "failed to clear session after a partial persist");
            }
            return Err(error.into());
        }
        Ok(())
    }

    /// The currently stored token, if a usable one exists.
    ///
    /// Storage read failures and malformed values degrade to `None` with a
    /// warning; the caller's request then proceeds unauthenticated.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        let raw = match self.store.get(AUTH_TOKEN_KEY) {
            Ok(value) => value?,
            Err(error) => {
                warn!(error = %error, "failed to read the session token; proceeding unauthenticated");
                return None;
            }
        };
        match SessionToken::new(raw) {
            Ok(token) => Some(token),
            Err(error) => {
                warn!(error = %error, "stored session token is unusable; proceeding unauthenticated");
                None
            }
        }
    }

    /// The currently stored user record, if a parseable one exists.
    #[must_use]
    pub fn current_user(&self) -> Option<AdminUser> {
        let raw = match self.store.get(AUTH_USER_KEY) {
            Ok(value) => value?,
            Err(error) => {
                warn!(error = %error, "failed to read the current user record");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                warn!(error = %error, "stored current user record is malformed");
                None
            }
        }
    }

    /// Remove the token and user record.
    ///
    /// Both removals are attempted even when the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`KeyValueStoreError`] encountered.
    pub fn clear(&self) -> Result<(), KeyValueStoreError> {
        let token_removed = self.store.remove(AUTH_TOKEN_KEY);
        let user_removed = self.store.remove(AUTH_USER_KEY);
        token_removed.and(user_removed)
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::{InMemoryKeyValueStore, MockKeyValueStore};
    use crate::domain::resources::{AdminRole, AdminUser};

    #[fixture]
    fn user() -> AdminUser {
        AdminUser {
            id: Uuid::nil(),
            name: "Amira".to_owned(),
            email: "amira@example.test".to_owned(),
            role: AdminRole::Manager,
            active: true,
        }
    }

    #[rstest]
    fn persist_then_read_round_trips(user: AdminUser) {
        let session = SessionContext::new(Arc::new(InMemoryKeyValueStore::new()));
        let token = SessionToken::new("tok-123").expect("token is valid");

        session.persist(&token, &user).expect("persist succeeds");

        assert_eq!(session.token().expect("token present").reveal(), "tok-123");
        assert_eq!(session.current_user().expect("user present").name, "Amira");
    }

    #[rstest]
    fn clear_removes_both_records(user: AdminUser) {
        let session = SessionContext::new(Arc::new(InMemoryKeyValueStore::new()));
        let token = SessionToken::new("tok-123").expect("token is valid");
        session.persist(&token, &user).expect("persist succeeds");

        session.clear().expect("clear succeeds");

        assert!(session.token().is_none());
        assert!(session.current_user().is_none());
    }

    #[rstest]
    fn read_failures_degrade_to_anonymous() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get()
            .with(eq(AUTH_TOKEN_KEY))
            .returning(|_| Err(KeyValueStoreError::backend("disk detached")));
        let session = SessionContext::new(Arc::new(store));

        assert!(session.token().is_none());
    }

    #[rstest]
    fn blank_stored_token_is_unusable() {
        let store = InMemoryKeyValueStore::new();
        store.set(AUTH_TOKEN_KEY, "   ").expect("write succeeds");
        let session = SessionContext::new(Arc::new(store));

        assert!(session.token().is_none());
    }

    #[rstest]
    fn malformed_user_record_degrades_to_none(user: AdminUser) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let session = SessionContext::new(store.clone());
        let token = SessionToken::new("tok-123").expect("token is valid");
        session.persist(&token, &user).expect("persist succeeds");
        store.set(AUTH_USER_KEY, "{not json").expect("write succeeds");

        assert!(session.current_user().is_none());
        // The token is unaffected by the corrupt user record.
        assert!(session.token().is_some());
    }

    #[rstest]
    fn failed_persist_leaves_no_half_written_session(user: AdminUser) {
        // Eight bytes: enough for nothing, so the first write already fails.
        let session = SessionContext::new(Arc::new(InMemoryKeyValueStore::with_capacity_limit(8)));
        let token = SessionToken::new("tok-123").expect("token is valid");

        let result = session.persist(&token, &user);

        assert!(matches!(
            result,
            Err(SessionPersistError::Storage(
                KeyValueStoreError::CapacityExceeded { .. }
            ))
        ));
        assert!(session.token().is_none());
        assert!(session.current_user().is_none());
    }

    #[rstest]
    fn debug_output_redacts_the_token() {
        let token = SessionToken::new("super-secret").expect("token is valid");
        assert_eq!(format!("{token:?}"), "SessionToken(<redacted>)");
    }
}
