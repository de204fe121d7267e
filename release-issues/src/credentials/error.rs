//! Credential loading error types.

use thiserror::Error;

/// Errors that can occur while loading the access token.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Failed to read the token file.
    #[error("Failed to read token file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
