//! Project path extraction from an issues page link.
//!
//! Assumes links shaped like
//! `https://gitlab.com/<group>/<subgroup>/<subgroup>/<project>/-/issues/`,
//! i.e. a project nested exactly four levels deep.

mod error;

pub use error::LinkError;

use url::Url;

/// Issues page of the project the report is built for.
pub const DEFAULT_ISSUES_LINK: &str =
    "https://gitlab.com/f5/volterra/support/technical/-/issues/?sort=created_date&state=opened";

/// Number of path segments that make up the project path.
const PROJECT_PATH_SEGMENTS: usize = 4;

/// REST API root relative to the server.
const API_ROOT: &str = "/api/v4/";

/// Extracts the project path (`a/b/c/d`) from an issues link.
///
/// # Errors
///
/// Returns [`LinkError::Parse`] if the link is not a URL and
/// [`LinkError::TooShort`] if fewer than four non-empty path segments exist.
pub fn extract_project_path(link: &str) -> Result<String, LinkError> {
    let url = parse(link)?;
    let too_short = || LinkError::TooShort {
        link: link.to_string(),
    };

    let segments: Vec<&str> = url
        .path_segments()
        .ok_or_else(too_short)?
        .take(PROJECT_PATH_SEGMENTS)
        .collect();

    if segments.len() < PROJECT_PATH_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
        return Err(too_short());
    }

    Ok(segments.join("/"))
}

/// Returns the REST API base URL of the server hosting `link`.
///
/// # Errors
///
/// Returns [`LinkError::Parse`] if the link is not a URL.
pub fn api_base_url(link: &str) -> Result<Url, LinkError> {
    let url = parse(link)?;
    url.join(API_ROOT).map_err(|e| LinkError::Parse {
        link: link.to_string(),
        source: e,
    })
}

fn parse(link: &str) -> Result<Url, LinkError> {
    Url::parse(link).map_err(|e| LinkError::Parse {
        link: link.to_string(),
        source: e,
    })
}
