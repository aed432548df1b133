//! Error types of the HTTP score store.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`ScoreApiError`] failures.
pub type ScoreApiResult<T> = Result<T, ScoreApiError>;

/// Failures that can occur while talking to the score API.
#[derive(Debug, Error)]
pub enum ScoreApiError {
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build score API client")]
    ClientBuilder {
        /// reqwest failure.
        #[source]
        source: reqwest::Error,
    },
    /// The update request could not be sent or no response arrived.
    #[error("failed to send score update to `{url}`")]
    RequestSend {
        /// Endpoint that was called.
        url: String,
        /// reqwest failure.
        #[source]
        source: reqwest::Error,
    },
    /// The API answered with a non-success status.
    #[error("unexpected score API response status {status} for `{url}`")]
    RequestStatus {
        /// Endpoint that was called.
        url: String,
        /// Status it answered with.
        status: StatusCode,
    },
}
