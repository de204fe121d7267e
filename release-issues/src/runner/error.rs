//! Runner error types.

/// Errors that can occur during a report run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid filter options.
    #[error(transparent)]
    Filter(#[from] crate::filter::FilterError),

    /// Token file could not be loaded.
    #[error(transparent)]
    Credentials(#[from] crate::credentials::CredentialError),

    /// Issues link could not be parsed.
    #[error(transparent)]
    Link(#[from] crate::link::LinkError),

    /// GitLab client or API errors.
    #[error(transparent)]
    GitLab(#[from] crate::gitlab::GitLabError),

    /// Report file errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
