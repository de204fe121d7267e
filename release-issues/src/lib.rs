#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod credentials;
pub mod filter;
pub mod gitlab;
pub mod link;
pub mod report;
pub mod runner;
pub mod summary;

pub use credentials::{expand_home, load_token, parse_token, read_token, CredentialError};
pub use filter::{FilterCriteria, FilterError, LabelSets, READY_FOR_TEST_LABEL};
pub use gitlab::{
    GitLabClient, GitLabError, IssueDetail, IssuePage, IssueSummary, IssueUser, ListIssuesOptions,
};
pub use link::{api_base_url, extract_project_path, LinkError};
pub use report::{report_file_name, ReportError, ReportOutput, ReportRow, ReportWriter};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
