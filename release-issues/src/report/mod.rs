//! CSV report output.
//!
//! Each run writes a new file named after the local time it was created,
//! e.g. `issues_output_2024-03-05_14-07-09.csv`. Two runs within the same
//! second write to the same name; the later one truncates the earlier file.

mod error;
mod row;

pub use error::ReportError;
pub use row::{ReportRow, CREATED_AT_FORMAT, UNASSIGNED};

use chrono::{DateTime, Local};
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Column names written as the first record.
pub const REPORT_HEADER: [&str; 5] = ["Issue", "Summary", "Assignee", "Author", "Date of Creation"];

const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Returns the report file name for a run started at `now`.
pub fn report_file_name(now: &DateTime<Local>) -> String {
    format!("issues_output_{}.csv", now.format(FILE_TIMESTAMP_FORMAT))
}

/// A finished report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutput {
    /// Path of the written file.
    pub path: PathBuf,
    /// Number of data rows, header excluded.
    pub rows: usize,
}

/// Writes report rows to a new CSV file.
pub struct ReportWriter {
    path: PathBuf,
    writer: Writer<File>,
    rows: usize,
}

impl ReportWriter {
    /// Creates the report file in `dir` and writes the header.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be created or the header
    /// cannot be written.
    pub fn create(dir: &Path, now: &DateTime<Local>) -> Result<Self, ReportError> {
        let path = dir.join(report_file_name(now));
        let file = File::create(&path).map_err(|e| ReportError::Create {
            path: path.display().to_string(),
            source: e,
        })?;
        info!(path = %path.display(), "Report file created");

        let mut report = Self {
            path,
            writer: Writer::from_writer(file),
            rows: 0,
        };
        report.write_record(REPORT_HEADER)?;
        debug!("Header written");

        Ok(report)
    }

    /// Returns the path of the report file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Write`] if the record cannot be written.
    pub fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError> {
        self.write_record(row.as_record())?;
        self.rows += 1;
        Ok(())
    }

    /// Flushes the file and returns what was written.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Flush`] if buffered rows cannot be flushed.
    pub fn finish(mut self) -> Result<ReportOutput, ReportError> {
        self.writer.flush().map_err(|e| ReportError::Flush {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(ReportOutput {
            path: self.path,
            rows: self.rows,
        })
    }

    fn write_record(&mut self, record: [&str; 5]) -> Result<(), ReportError> {
        self.writer
            .write_record(record)
            .map_err(|e| ReportError::Write {
                path: self.path.display().to_string(),
                source: e,
            })
    }
}
