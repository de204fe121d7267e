//! Run summary types.

use std::path::PathBuf;

/// Summary of a complete report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Project the issues were listed from.
    pub project_path: String,

    /// Path of the written CSV file.
    pub report_path: PathBuf,

    /// Number of issue rows written.
    pub issues_written: usize,

    /// Next result page reported by the API, when the list was cut at the page size.
    pub next_page: Option<u32>,
}

impl RunSummary {
    /// Returns true if matching issues beyond the first page were left out.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.next_page.is_some()
    }
}
