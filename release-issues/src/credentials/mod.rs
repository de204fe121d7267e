//! Access token loading.
//!
//! The token lives in a plain file in the user's home directory. The file
//! may hold either the bare token or `token:<value>`.

mod error;

pub use error::CredentialError;

use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default location of the token file.
pub const DEFAULT_TOKEN_FILE: &str = "~/.gitlab";

/// Prefix stripped from the token file contents.
const TOKEN_PREFIX: &str = "token:";

/// Expands and reads the token file at `raw_path`.
///
/// # Errors
///
/// Returns [`CredentialError::Read`] if the file cannot be read.
pub fn load_token(raw_path: &str) -> Result<String, CredentialError> {
    let path = expand_home(raw_path);
    info!(path = %path.display(), "Reading token file");
    read_token(&path)
}

/// Replaces a leading `~` with the current user's home directory.
///
/// If the home directory cannot be resolved the path is returned unchanged.
pub fn expand_home(raw_path: &str) -> PathBuf {
    let Some(rest) = raw_path.strip_prefix('~') else {
        return PathBuf::from(raw_path);
    };

    // Only `~` and `~/...`; `~user` forms are left alone.
    if !(rest.is_empty() || rest.starts_with('/')) {
        return PathBuf::from(raw_path);
    }

    expand_with_home(raw_path, rest, dirs::home_dir())
}

fn expand_with_home(raw_path: &str, rest: &str, home: Option<PathBuf>) -> PathBuf {
    match home {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => {
            warn!(path = raw_path, "Could not resolve home directory, using path as given");
            PathBuf::from(raw_path)
        }
    }
}

/// Reads a token file and returns the cleaned token.
///
/// # Errors
///
/// Returns [`CredentialError::Read`] if the file cannot be read.
pub fn read_token(path: &Path) -> Result<String, CredentialError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CredentialError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_token(&contents))
}

/// Trims whitespace and strips a leading `token:` prefix.
pub fn parse_token(contents: &str) -> String {
    let trimmed = contents.trim();
    trimmed
        .strip_prefix(TOKEN_PREFIX)
        .unwrap_or(trimmed)
        .to_string()
}
