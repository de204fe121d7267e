//! Runner configuration.

use crate::credentials::DEFAULT_TOKEN_FILE;
use crate::filter::FilterCriteria;
use crate::link::DEFAULT_ISSUES_LINK;
use std::path::{Path, PathBuf};

/// Configuration for a report run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Validated label filter.
    criteria: FilterCriteria,
    /// Token file path; may start with `~`.
    token_file: String,
    /// Issues page link naming the project and server.
    issues_link: String,
    /// Directory the report file is written to.
    output_dir: PathBuf,
}

impl RunnerConfig {
    /// Creates a configuration with the default token file, issues link
    /// and the current directory as output directory.
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            token_file: DEFAULT_TOKEN_FILE.to_string(),
            issues_link: DEFAULT_ISSUES_LINK.to_string(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Sets a custom token file path.
    pub fn with_token_file(mut self, token_file: impl Into<String>) -> Self {
        self.token_file = token_file.into();
        self
    }

    /// Sets a custom issues link.
    pub fn with_issues_link(mut self, issues_link: impl Into<String>) -> Self {
        self.issues_link = issues_link.into();
        self
    }

    /// Sets a custom output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Returns the label filter.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Returns the token file path as configured.
    pub fn token_file(&self) -> &str {
        &self.token_file
    }

    /// Returns the issues link.
    pub fn issues_link(&self) -> &str {
        &self.issues_link
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
