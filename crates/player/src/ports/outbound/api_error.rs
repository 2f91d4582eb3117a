//! Errors crossing the HTTP boundary.

/// Failure talking to the editor backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
