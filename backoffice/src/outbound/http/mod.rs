//! Reqwest-backed API client.
//!
//! This adapter owns transport details only: URL construction, bearer-token
//! attachment, timeout handling, and normalization of every failure into
//! [`ApiError`]. One generic [`ApiClient::request`] primitive underlies the
//! typed functions spread across the sibling resource modules; the
//! primitive itself never mutates session state.
//!
//! There are no retries, no caching, and no pagination logic here — callers
//! own retry UX, and collection query parameters pass through verbatim.

mod admin_users;
mod auth;
mod blog;
mod bulk;
mod businesses;
mod campaigns;
mod cards;
mod coupons;
mod customers;
mod products;
mod reports;
mod settings;
mod site_content;
mod stores;
mod subscriptions;

use std::time::Duration;

use envelope::Envelope;
use reqwest::{Client, Method, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use auth::LoginPayload;
pub use bulk::{BulkFailure, BulkOutcome};

use crate::config::{ApiSettings, ConfigError, DEFAULT_REQUEST_TIMEOUT_SECONDS};
use crate::domain::{ApiError, ApiResult, SessionContext, SessionToken};

/// Fixed default bound after which a pending request counts as unreachable.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS);

/// Failures raised while constructing the client. Construction is the
/// fail-fast boundary: a missing base URL never becomes a runtime error.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientBuildError {
    /// Deployment configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to construct the HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Options for one request issued through [`ApiClient::request`].
#[derive(Debug, Default)]
pub struct RequestSpec {
    query: Vec<(&'static str, String)>,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
    token_override: Option<SessionToken>,
}

impl RequestSpec {
    /// Spec with no query, body, extra headers, or token override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach query-string pairs.
    #[must_use]
    pub fn with_query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] carrying the serializer's message when the
    /// body fails to serialize.
    pub fn with_json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|error| ApiError::new(format!("failed to encode the request body: {error}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Attach an extra header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Use this token instead of whatever the session holds.
    #[must_use]
    pub fn with_bearer_override(mut self, token: SessionToken) -> Self {
        self.token_override = Some(token);
        self
    }
}

/// Envelope for acknowledgement-style responses whose `data` is null.
pub type AckEnvelope = Envelope<Option<serde_json::Value>>;

/// Single point of HTTP access to the back-office backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionContext,
}

impl ApiClient {
    /// Client with the fixed default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientBuildError`] when the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: Url, session: SessionContext) -> Result<Self, ApiClientBuildError> {
        Self::with_timeout(base_url, session, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientBuildError`] when the HTTP client cannot be
    /// constructed.
    pub fn with_timeout(
        base_url: Url,
        session: SessionContext,
        timeout: Duration,
    ) -> Result<Self, ApiClientBuildError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: ensure_trailing_slash(base_url),
            session,
        })
    }

    /// Client built from deployment configuration; fails fast when the base
    /// URL is absent or invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientBuildError::Config`] for configuration problems
    /// and [`ApiClientBuildError::Http`] for client construction problems.
    pub fn from_settings(
        settings: &ApiSettings,
        session: SessionContext,
    ) -> Result<Self, ApiClientBuildError> {
        let base_url = settings.require_base_url()?;
        Self::with_timeout(
            base_url,
            session,
            Duration::from_secs(settings.request_timeout_seconds),
        )
    }

    /// The session context this client reads tokens from.
    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Execute one request and decode the JSON response.
    ///
    /// Token resolution order: explicit override on the [`RequestSpec`], else the
    /// session's stored token, else the request proceeds unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] following the documented precedence: the server
    /// message field, the status-line fallback, the fixed
    /// unreachable-backend text, or the transport diagnostic.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        spec: RequestSpec,
    ) -> ApiResult<T> {
        let url = self.endpoint(path)?;
        let mut builder = self.http.request(method, url);
        if !spec.query.is_empty() {
            builder = builder.query(&spec.query);
        }
        if let Some(body) = &spec.body {
            builder = builder.json(body);
        }
        for (name, value) in &spec.headers {
            builder = builder.header(name, value);
        }
        let token = spec.token_override.or_else(|| self.session.token());
        if let Some(token) = &token {
            builder = builder.bearer_auth(token.reveal());
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        serde_json::from_slice(body.as_ref()).map_err(|error| {
            ApiError::new(format!("failed to decode the server response: {error}"))
        })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|error| ApiError::new(format!("invalid request path '{path}': {error}")))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(&'static str, String)>,
    ) -> ApiResult<T> {
        self.request(Method::GET, path, RequestSpec::new().with_query(query))
            .await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::POST, path, RequestSpec::new().with_json(body)?)
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::POST, path, RequestSpec::new()).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PUT, path, RequestSpec::new().with_json(body)?)
            .await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.request(Method::PATCH, path, RequestSpec::new().with_json(body)?)
            .await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::DELETE, path, RequestSpec::new()).await
    }
}

fn ensure_trailing_slash(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() || error.is_connect() {
        debug!(error = %error, "request reached no backend");
        return ApiError::cannot_reach_backend();
    }
    ApiError::new(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let server_message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty());
    server_message.map_or_else(
        || {
            ApiError::from_status_line(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
            )
        },
        ApiError::new,
    )
}

#[cfg(test)]
mod tests {
    //! Unit tests for URL handling and error normalization.

    use std::sync::Arc;

    use rstest::rstest;

    use super::*;
    use crate::domain::CANNOT_REACH_BACKEND_MESSAGE;
    use crate::domain::ports::InMemoryKeyValueStore;

    fn client(base: &str) -> ApiClient {
        let session = SessionContext::new(Arc::new(InMemoryKeyValueStore::new()));
        let base_url = Url::parse(base).expect("base URL parses");
        ApiClient::new(base_url, session).expect("client builds")
    }

    #[rstest]
    #[case("https://api.example.test/v1", "stores", "https://api.example.test/v1/stores")]
    #[case("https://api.example.test/v1/", "stores", "https://api.example.test/v1/stores")]
    #[case(
        "https://api.example.test",
        "blog/posts",
        "https://api.example.test/blog/posts"
    )]
    fn endpoint_joins_relative_paths(
        #[case] base: &str,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        let joined = client(base).endpoint(path).expect("join succeeds");
        assert_eq!(joined.as_str(), expected);
    }

    #[rstest]
    #[case(br#"{"message": "store not found"}"#.as_slice())]
    #[case(br#"{"message": "store not found", "code": "NOT_FOUND", "traceId": "abc"}"#.as_slice())]
    fn status_error_prefers_the_server_message(#[case] body: &[u8]) {
        let error = map_status_error(StatusCode::NOT_FOUND, body);
        assert_eq!(error.message(), "store not found");
    }

    #[rstest]
    #[case(br#"{}"#.as_slice())]
    #[case(br#"{"message": "  "}"#.as_slice())]
    #[case(b"<html>gateway</html>".as_slice())]
    fn status_error_falls_back_to_the_status_line(#[case] body: &[u8]) {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, body);
        assert_eq!(
            error.message(),
            "server responded with 500 Internal Server Error"
        );
    }

    #[rstest]
    fn with_json_surfaces_the_serializer_message() {
        let mut body = std::collections::BTreeMap::new();
        body.insert(vec!["not", "a", "string"], 1_u32);
        let error = RequestSpec::new()
            .with_json(&body)
            .expect_err("non-string map keys cannot serialize");
        assert!(
            error
                .message()
                .starts_with("failed to encode the request body"),
            "unexpected message: {}",
            error.message()
        );
    }

    #[rstest]
    fn unreachable_constant_matches_the_domain_error() {
        assert_eq!(
            ApiError::cannot_reach_backend().message(),
            CANNOT_REACH_BACKEND_MESSAGE
        );
    }
}
