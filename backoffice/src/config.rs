//! Deployment configuration loaded via OrthoConfig.
//!
//! The base URL is the one setting the client cannot run without: its
//! absence is a fatal startup condition surfaced by [`ApiSettings::require_base_url`]
//! before any request is issued, never a runtime error to recover from.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

/// Default bound after which a pending request counts as a network failure.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Errors raised while resolving deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No base URL was supplied by the deployment environment.
    #[error("BACKOFFICE_API_BASE_URL is not set; the client cannot start without a backend base URL")]
    MissingBaseUrl,
    /// The supplied base URL could not be parsed.
    #[error("invalid backend base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// The raw value that failed to parse.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Configuration values controlling the API client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BACKOFFICE")]
pub struct ApiSettings {
    /// Base URL all backend requests are issued relative to.
    pub api_base_url: Option<String>,
    /// Request timeout in seconds; defaults to [`DEFAULT_REQUEST_TIMEOUT_SECONDS`].
    #[ortho_config(default = DEFAULT_REQUEST_TIMEOUT_SECONDS)]
    pub request_timeout_seconds: u64,
}

impl ApiSettings {
    /// Resolve the configured base URL, failing fast when absent or invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBaseUrl`] when no value is configured
    /// and [`ConfigError::InvalidBaseUrl`] when the value does not parse.
    pub fn require_base_url(&self) -> Result<Url, ConfigError> {
        let raw = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        Url::parse(raw).map_err(|error| ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }
}
