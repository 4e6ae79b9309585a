//! Error and result types for pull request API operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for client operations.
///
/// Every failure is per-call: an operation either fully succeeds with a
/// decoded value or fails with exactly one of these variants. Nothing is
/// retried or recovered internally.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    // Network/API errors
    #[error("network request failed: {0}")]
    Transport(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    // Response body does not match the expected shape
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a not found error with the requested route for context
    pub fn not_found(route: impl Into<String>) -> Self {
        Self::NotFound(route.into())
    }
}

// Transport failures are surfaced verbatim; status handling happens at the
// decode layer, which sees the raw status and body instead of a reqwest
// status error.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
