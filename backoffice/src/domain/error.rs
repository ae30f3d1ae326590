//! The normalized error every network operation fails with.
//!
//! Downstream consumers only ever see this one shape; the raw transport
//! error never crosses the client boundary. The client deliberately does
//! not distinguish validation, auth, and server failures here — callers can
//! display the message but not branch on a kind, which keeps the UI error
//! path uniform.

/// Fixed message used when a request was sent but no response arrived.
pub const CANNOT_REACH_BACKEND_MESSAGE: &str =
    "cannot reach the backend server; check your connection and try again";

const GENERIC_FAILURE_MESSAGE: &str = "the request failed without a server message";

/// Validation failures raised by the fallible [`ApiError`] constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorValidationError {
    /// An error without a displayable message is useless to the UI.
    EmptyMessage,
}

impl std::fmt::Display for ApiErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
        }
    }
}

impl std::error::Error for ApiErrorValidationError {}

/// Normalized API error: a single human-readable message.
///
/// ## Invariants
/// - `message` is non-empty once trimmed of whitespace.
///
/// Construction precedence is enforced where responses are mapped (see the
/// HTTP module): a server-supplied message wins over the status-line
/// fallback, which wins over the fixed unreachable-backend text, which wins
/// over the raw transport diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    /// Construct an error, substituting a generic message when blank.
    ///
    /// Server error bodies are untrusted input; a blank message must not
    /// produce an error the UI cannot display.
    pub fn new(message: impl Into<String>) -> Self {
        Self::try_new(message).unwrap_or_else(|ApiErrorValidationError::EmptyMessage| Self {
            message: GENERIC_FAILURE_MESSAGE.to_owned(),
        })
    }

    /// Fallible constructor that rejects blank messages.
    ///
    /// # Errors
    ///
    /// Returns [`ApiErrorValidationError::EmptyMessage`] when the message is
    /// empty after trimming.
    pub fn try_new(message: impl Into<String>) -> Result<Self, ApiErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ApiErrorValidationError::EmptyMessage);
        }
        Ok(Self { message })
    }

    /// Error for a request that was sent but never answered.
    #[must_use]
    pub fn cannot_reach_backend() -> Self {
        Self {
            message: CANNOT_REACH_BACKEND_MESSAGE.to_owned(),
        }
    }

    /// Status-line fallback used when the server supplied no message field.
    #[must_use]
    pub fn from_status_line(status: u16, reason: &str) -> Self {
        Self {
            message: format!("server responded with {status} {reason}"),
        }
    }

    /// Human-readable message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Convenience alias for typed API functions.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn try_new_rejects_blank_messages() {
        assert_eq!(
            ApiError::try_new("   "),
            Err(ApiErrorValidationError::EmptyMessage)
        );
    }

    #[rstest]
    fn new_substitutes_a_generic_message_for_blanks() {
        let error = ApiError::new("");
        assert!(!error.message().trim().is_empty());
    }

    #[rstest]
    fn status_line_fallback_combines_code_and_reason() {
        let error = ApiError::from_status_line(500, "Internal Server Error");
        assert_eq!(
            error.message(),
            "server responded with 500 Internal Server Error"
        );
    }

    #[rstest]
    fn display_is_exactly_the_message() {
        let error = ApiError::new("not found");
        assert_eq!(error.to_string(), "not found");
    }

    #[rstest]
    fn unreachable_backend_uses_the_fixed_text() {
        assert_eq!(
            ApiError::cannot_reach_backend().message(),
            CANNOT_REACH_BACKEND_MESSAGE
        );
    }
}
