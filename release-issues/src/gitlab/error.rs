//! GitLab API error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitLab API.
#[derive(Debug, Error)]
pub enum GitLabError {
    /// The HTTP client could not be built.
    #[error("Failed to create GitLab client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure.
    #[error("GitLab request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("GitLab API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode GitLab response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A request URL could not be built.
    #[error("Invalid GitLab API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
