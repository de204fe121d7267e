//! GitLab REST client for project issues.
//!
//! Covers the two calls a report needs: a filtered list of open project
//! issues and the detail record of a single issue. Only the first page of
//! the list is requested; callers see whether more pages exist through
//! [`IssuePage::next_page`].

mod error;
mod models;

pub use error::GitLabError;
pub use models::{IssueDetail, IssuePage, IssueSummary, IssueUser};

use crate::filter::LabelSets;
use reqwest::header::HeaderMap;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// Header carrying the personal access token.
const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Header carrying the next page number of a paginated list.
const NEXT_PAGE_HEADER: &str = "x-next-page";

/// Issue state requested from the list endpoint.
pub const OPENED_STATE: &str = "opened";

/// Page size requested from the list endpoint.
pub const ISSUES_PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("release-issues/", env!("CARGO_PKG_VERSION"));

/// Query options for the project issue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListIssuesOptions {
    pub state: String,
    pub per_page: u32,
    /// Labels every issue must carry.
    pub labels: Vec<String>,
    /// Labels no issue may carry.
    pub not_labels: Vec<String>,
}

impl ListIssuesOptions {
    /// Lists open issues filtered by the given label sets.
    pub fn opened(label_sets: &LabelSets) -> Self {
        Self {
            state: OPENED_STATE.to_string(),
            per_page: ISSUES_PER_PAGE,
            labels: label_sets.include.clone(),
            not_labels: label_sets.exclude.clone(),
        }
    }
}

/// Authenticated GitLab API client.
#[derive(Clone)]
pub struct GitLabClient {
    http: Client,
    api_base: Url,
    token: String,
}

impl std::fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabClient")
            .field("api_base", &self.api_base)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GitLabClient {
    /// Creates a client for the API rooted at `api_base` (e.g. `https://gitlab.com/api/v4/`).
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError::Client`] if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>, api_base: Url) -> Result<Self, GitLabError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(GitLabError::Client)?;

        Ok(Self {
            http,
            api_base,
            token: token.into(),
        })
    }

    /// Returns the API base URL.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Lists the first page of issues of `project` matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError`] if the request fails or the response cannot be decoded.
    pub async fn list_project_issues(
        &self,
        project: &str,
        options: &ListIssuesOptions,
    ) -> Result<IssuePage, GitLabError> {
        let mut url = self.project_url(project, &["issues"])?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("state", &options.state)
                .append_pair("per_page", &options.per_page.to_string());
            if !options.labels.is_empty() {
                query.append_pair("labels", &options.labels.join(","));
            }
            if !options.not_labels.is_empty() {
                query.append_pair("not[labels]", &options.not_labels.join(","));
            }
        }

        let (issues, headers) = self.get_json::<Vec<IssueSummary>>(url).await?;
        Ok(IssuePage {
            issues,
            next_page: next_page(&headers),
        })
    }

    /// Fetches a single issue of `project` by its project-scoped number.
    ///
    /// # Errors
    ///
    /// Returns [`GitLabError`] if the request fails or the response cannot be decoded.
    pub async fn get_issue(&self, project: &str, iid: u64) -> Result<IssueDetail, GitLabError> {
        let url = self.project_url(project, &["issues", &iid.to_string()])?;
        let (issue, _) = self.get_json(url).await?;
        Ok(issue)
    }

    /// Builds `<api_base>/projects/<encoded project>/<tail...>`.
    fn project_url(&self, project: &str, tail: &[&str]) -> Result<Url, GitLabError> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                GitLabError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?;
            // The project path travels as a single segment, so its slashes get encoded.
            segments.pop_if_empty().push("projects").push(project);
            for segment in tail {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<(T, HeaderMap), GitLabError> {
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(url.clone())
            .header(PRIVATE_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GitLabError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let headers = response.headers().clone();
        let body = response.text().await?;
        let value = serde_json::from_str(&body).map_err(|e| GitLabError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        Ok((value, headers))
    }
}

/// Reads the next page number; GitLab sends an empty value on the last page.
fn next_page(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(NEXT_PAGE_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;
    use mockito::Matcher;

    const PROJECT: &str = "f5/volterra/support/technical";
    const ISSUES_PATH: &str = "/api/v4/projects/f5%2Fvolterra%2Fsupport%2Ftechnical/issues";

    fn client_for(server: &mockito::Server) -> GitLabClient {
        let base = Url::parse(&format!("{}/api/v4/", server.url())).unwrap();
        GitLabClient::new("abc123", base).unwrap()
    }

    #[test]
    fn list_options_follow_label_sets() {
        let criteria = FilterCriteria::new("release-7", true, "staging-upgrade").unwrap();
        let options = ListIssuesOptions::opened(&criteria.label_sets());

        assert_eq!(options.state, "opened");
        assert_eq!(options.per_page, 100);
        assert_eq!(
            options.labels,
            vec!["release-7", "READY-FOR-TEST", "staging-upgrade"]
        );
        assert!(options.not_labels.is_empty());
    }

    #[test]
    fn debug_redacts_token() {
        let client =
            GitLabClient::new("glpat-secret", Url::parse("https://gitlab.com/api/v4/").unwrap())
                .unwrap();
        let rendered = format!("{client:?}");

        assert!(!rendered.contains("glpat-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn lists_issues_with_label_filters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", ISSUES_PATH)
            .match_header("PRIVATE-TOKEN", "abc123")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "opened".into()),
                Matcher::UrlEncoded("per_page".into(), "100".into()),
                Matcher::UrlEncoded("labels".into(), "release-7".into()),
                Matcher::UrlEncoded("not[labels]".into(), "READY-FOR-TEST".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("x-next-page", "")
            .with_body(
                r#"[
                    {"iid": 12, "title": "First", "assignee": {"name": "Ada Lovelace", "username": "ada"}, "labels": ["release-7"]},
                    {"iid": 9, "title": "Second", "assignee": null, "labels": ["release-7"]}
                ]"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let criteria = FilterCriteria::new("release-7", false, "").unwrap();
        let page = client
            .list_project_issues(PROJECT, &ListIssuesOptions::opened(&criteria.label_sets()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(page.issues.len(), 2);
        assert_eq!(page.issues[0].iid, 12);
        assert_eq!(page.issues[0].assignee.as_ref().unwrap().name, "Ada Lovelace");
        assert!(page.issues[1].assignee.is_none());
        assert_eq!(page.next_page, None);
    }

    #[tokio::test]
    async fn reports_next_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", ISSUES_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("x-next-page", "2")
            .with_body("[]")
            .create_async()
            .await;

        let client = client_for(&server);
        let page = client
            .list_project_issues(PROJECT, &ListIssuesOptions::opened(&LabelSets::default()))
            .await
            .unwrap();

        assert!(page.issues.is_empty());
        assert_eq!(page.next_page, Some(2));
    }

    #[tokio::test]
    async fn fetches_issue_detail() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", format!("{ISSUES_PATH}/12").as_str())
            .match_header("PRIVATE-TOKEN", "abc123")
            .with_status(200)
            .with_body(
                r#"{
                    "iid": 12,
                    "title": "Fix login",
                    "author": {"name": "Grace Hopper", "username": "grace"},
                    "web_url": "https://gitlab.com/f5/volterra/support/technical/-/issues/12",
                    "created_at": "2024-03-05T14:07:09.000Z"
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let issue = client.get_issue(PROJECT, 12).await.unwrap();

        mock.assert_async().await;
        assert_eq!(issue.title, "Fix login");
        assert_eq!(issue.author.username, "grace");
        assert_eq!(
            issue.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-03-05 14:07:09"
        );
    }

    #[tokio::test]
    async fn api_errors_carry_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", format!("{ISSUES_PATH}/3").as_str())
            .with_status(401)
            .with_body(r#"{"message":"401 Unauthorized"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client.get_issue(PROJECT, 3).await;

        assert!(matches!(
            result,
            Err(GitLabError::Api { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", ISSUES_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"not": "a list"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .list_project_issues(PROJECT, &ListIssuesOptions::opened(&LabelSets::default()))
            .await;

        assert!(matches!(result, Err(GitLabError::Decode { .. })));
    }
}
