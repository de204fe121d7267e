//! Report row formatting.

use crate::gitlab::{IssueDetail, IssueSummary};

/// Assignee column value for issues nobody is assigned to.
pub const UNASSIGNED: &str = "Unassigned";

/// Format of the creation date column.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Markdown link `[#<iid>](<web_url>)`.
    pub issue: String,
    pub summary: String,
    pub assignee: String,
    pub author: String,
    pub created: String,
}

impl ReportRow {
    /// Builds a row from the list entry and its detail record.
    ///
    /// The issue number and assignee come from the list entry, everything
    /// else from the detail record.
    pub fn from_issue(summary: &IssueSummary, detail: &IssueDetail) -> Self {
        let assignee = summary
            .assignee
            .as_ref()
            .map_or_else(|| UNASSIGNED.to_string(), |user| user.name.clone());

        Self {
            issue: format!("[#{}]({})", summary.iid, detail.web_url),
            summary: detail.title.clone(),
            assignee,
            author: detail.author.username.clone(),
            created: detail.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }

    pub(crate) fn as_record(&self) -> [&str; 5] {
        [
            self.issue.as_str(),
            self.summary.as_str(),
            self.assignee.as_str(),
            self.author.as_str(),
            self.created.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::IssueUser;
    use chrono::{TimeZone, Utc};

    fn detail(iid: u64) -> IssueDetail {
        IssueDetail {
            title: "Upgrade fails on staging".to_string(),
            author: IssueUser {
                name: "Grace Hopper".to_string(),
                username: "grace".to_string(),
            },
            web_url: format!("https://gitlab.com/a/b/c/d/-/issues/{iid}"),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap(),
        }
    }

    fn summary(iid: u64, assignee: Option<&str>) -> IssueSummary {
        IssueSummary {
            iid,
            assignee: assignee.map(|name| IssueUser {
                name: name.to_string(),
                username: name.to_lowercase(),
            }),
        }
    }

    #[test]
    fn formats_assigned_issue() {
        let row = ReportRow::from_issue(&summary(12, Some("Ada")), &detail(12));

        assert_eq!(row.issue, "[#12](https://gitlab.com/a/b/c/d/-/issues/12)");
        assert_eq!(row.summary, "Upgrade fails on staging");
        assert_eq!(row.assignee, "Ada");
        assert_eq!(row.author, "grace");
        assert_eq!(row.created, "2024-03-05 14:07:09");
    }

    #[test]
    fn unassigned_issue_uses_placeholder() {
        let row = ReportRow::from_issue(&summary(3, None), &detail(3));
        assert_eq!(row.assignee, UNASSIGNED);
    }
}
