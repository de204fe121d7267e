//! Filter validation error types.

use thiserror::Error;

/// Errors that can occur while resolving filter criteria.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Ready-for-test filtering was requested without a release label.
    #[error("Release label is required when filtering by READY-FOR-TEST")]
    ReleaseRequired,
}
