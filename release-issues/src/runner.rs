//! Orchestrates a report run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::credentials::load_token;
use crate::gitlab::{GitLabClient, ListIssuesOptions, ISSUES_PER_PAGE};
use crate::link::{api_base_url, extract_project_path};
use crate::report::{ReportRow, ReportWriter};
use crate::summary::RunSummary;
use chrono::Local;
use tracing::{info, info_span, warn, Instrument};

/// Lists matching issues and writes them to a report.
#[derive(Debug)]
pub struct Runner {
    config: RunnerConfig,
    client: GitLabClient,
    project_path: String,
}

impl Runner {
    /// Loads the token, resolves the project and builds the API client.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the token file cannot be read, the issues
    /// link is malformed, or the client cannot be created.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let token = load_token(config.token_file())?;

        info!(link = %config.issues_link(), "Resolving project");
        let project_path = extract_project_path(config.issues_link())?;
        info!(project = %project_path, "Project path resolved");

        let client = GitLabClient::new(token, api_base_url(config.issues_link())?)?;
        info!(api = %client.api_base(), "GitLab client created");

        Ok(Self {
            config,
            client,
            project_path,
        })
    }

    /// Returns the resolved project path.
    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    /// Executes the run: one list call, one detail call per issue, one report.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let label_sets = self.config.criteria().label_sets();
        let options = ListIssuesOptions::opened(&label_sets);

        let page = self
            .client
            .list_project_issues(&self.project_path, &options)
            .instrument(info_span!(
                "list_issues",
                project = %self.project_path,
                labels = ?options.labels,
                not_labels = ?options.not_labels
            ))
            .await?;
        info!(count = page.issues.len(), "Project issues listed");

        if let Some(next_page) = page.next_page {
            warn!(
                next_page,
                per_page = ISSUES_PER_PAGE,
                "More issues match than fit in one page, only the first page is reported"
            );
        }

        let mut report = ReportWriter::create(self.config.output_dir(), &Local::now())?;

        for issue in &page.issues {
            let detail = self
                .client
                .get_issue(&self.project_path, issue.iid)
                .instrument(info_span!("get_issue", iid = issue.iid))
                .await?;
            report.write_row(&ReportRow::from_issue(issue, &detail))?;
        }

        let output = report.finish()?;
        info!(path = %output.path.display(), rows = output.rows, "Report written");

        Ok(RunSummary {
            project_path: self.project_path.clone(),
            report_path: output.path,
            issues_written: output.rows,
            next_page: page.next_page,
        })
    }
}
