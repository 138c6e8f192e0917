//! Failure taxonomy for the request gateway.
//!
//! DESIGN
//! ======
//! Session expiry is a distinguished kind rather than a plain status error:
//! the gateway tears the session down itself, while a single top-level
//! observer performs the navigation. `Display` of a backend error is the
//! backend-supplied `detail` verbatim so pages can surface it directly.

use thiserror::Error;

/// Substitute detail when an error body is missing or unparseable.
pub const GENERIC_DETAIL: &str = "unknown error";

/// Errors raised by the authenticated request gateway. Never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered 401; the session has already been cleared.
    #[error("session expired")]
    SessionExpired,
    /// Structured non-success response from the backend.
    #[error("{detail}")]
    Api { status: u16, detail: String },
    /// Transport-level failure; no response body was available.
    #[error("{0}")]
    Network(String),
    /// A success response carried a body the client could not parse.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Stub error for request paths compiled without a browser runtime.
    pub fn unavailable() -> Self {
        Self::Network("not available on server".to_owned())
    }
}
