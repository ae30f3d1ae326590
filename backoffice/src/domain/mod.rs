//! Domain types shared by the HTTP client and the site content store.
//!
//! Everything here is transport agnostic: the normalized error callers
//! handle, the session context the client reads tokens from, the storage
//! port, and the resource models the typed API functions move.

mod error;
pub mod ports;
pub mod resources;
mod session;

pub use error::{ApiError, ApiErrorValidationError, ApiResult, CANNOT_REACH_BACKEND_MESSAGE};
pub use session::{
    AUTH_TOKEN_KEY, AUTH_USER_KEY, SessionContext, SessionPersistError, SessionToken,
    SessionTokenValidationError,
};
