//! Report writing error types.

use thiserror::Error;

/// Errors that can occur while writing the CSV report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the output file.
    #[error("Failed to create report file '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a record.
    #[error("Failed to write to report file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Failed to flush buffered records.
    #[error("Failed to flush report file '{path}': {source}")]
    Flush {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
