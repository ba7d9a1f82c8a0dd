//! Client error taxonomy
//!
//! Three failure classes with distinct retry semantics: HTTP status
//! failures and transport failures are retryable (subject to the caller's
//! configured retry count), schema violations are terminal.

use gh_query_cache::QueryError;
use thiserror::Error;

/// Failures from the GitHub API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("GitHub API error: {status_text}")]
    Request {
        /// HTTP status code
        status: u16,
        /// Canonical status text (e.g., "Forbidden")
        status_text: String,
    },

    /// The response body does not match the expected shape
    #[error("invalid GitHub API response: {0}")]
    Validation(String),

    /// The request could not complete (connect, DNS, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Build a `Request` error from an HTTP status code
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Request {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string(),
        }
    }
}

impl QueryError for ApiError {
    fn is_retryable(&self) -> bool {
        // A malformed body will be just as malformed on the next attempt.
        !matches!(self, ApiError::Validation(_))
    }
}
