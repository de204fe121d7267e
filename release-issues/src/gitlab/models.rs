//! GitLab issue payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A GitLab user as embedded in issue payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueUser {
    /// Display name.
    pub name: String,
    /// Login name.
    pub username: String,
}

/// An issue as returned by the project issue list.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueSummary {
    /// Project-scoped issue number.
    pub iid: u64,
    #[serde(default)]
    pub assignee: Option<IssueUser>,
}

/// A single issue as returned by the issue detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueDetail {
    pub title: String,
    pub author: IssueUser,
    /// Browser URL of the issue.
    pub web_url: String,
    pub created_at: DateTime<Utc>,
}

/// One page of the project issue list.
#[derive(Debug, Clone, Default)]
pub struct IssuePage {
    /// Issues in the order the API returned them.
    pub issues: Vec<IssueSummary>,
    /// Next page number, when the API reports more results.
    pub next_page: Option<u32>,
}
