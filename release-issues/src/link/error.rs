//! Issues link error types.

use thiserror::Error;

/// Errors that can occur while parsing the issues link.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The link is not a valid URL.
    #[error("Failed to parse issues link '{link}': {source}")]
    Parse {
        link: String,
        #[source]
        source: url::ParseError,
    },

    /// The link path has too few segments to name a project.
    #[error("Invalid issues link: {link}")]
    TooShort { link: String },
}
