//! Issue operations against the Gitee-style API.
//!
//! The backend speaks the full three-state vocabulary, so update states
//! pass through unchanged. The access token is an explicit parameter on
//! every request, including list requests.

use reqwest::{Response, header};
use tick_core::{Error, Issue, IssueUpdate, Platform, Result, StateFilter, sanitize_labels};
use tracing::debug;

use crate::client::GiteeClient;
use crate::consts::USER_AGENT;
use crate::models::{ApiErrorBody, CreateIssueRequest, GiteeIssue, UpdateIssueRequest};

impl GiteeClient {
  /// Create a new issue. Blank labels are dropped, the rest are joined
  /// into one comma-separated string.
  pub async fn create_issue(&self, owner: &str, repo: &str, title: &str, body: &str, labels: &[String]) -> Result<Issue> {
    let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
    let request = CreateIssueRequest {
      access_token: self.token.clone(),
      title: title.to_string(),
      body: body.to_string(),
      labels: sanitize_labels(labels).join(","),
    };

    debug!(owner, repo, "creating issue");

    let response = self
      .client
      .post(&url)
      .header(header::USER_AGENT, USER_AGENT)
      .json(&request)
      .send()
      .await
      .map_err(transport_error)?;

    read_issue(response).await
  }

  /// Apply a partial update to an existing issue.
  ///
  /// Only provided fields are transmitted; the state vocabulary
  /// (including `progressing`) is native here and passes through. A
  /// non-empty label set replaces the issue's labels wholesale.
  pub async fn update_issue(&self, owner: &str, repo: &str, number: u64, update: &IssueUpdate) -> Result<Issue> {
    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);
    let labels = sanitize_labels(&update.labels);
    let request = UpdateIssueRequest {
      access_token: self.token.clone(),
      title: update.title.clone(),
      body: update.body.clone(),
      state: update.state.map(|state| state.as_str()),
      labels: if labels.is_empty() { None } else { Some(labels.join(",")) },
    };

    debug!(owner, repo, number, "updating issue");

    let response = self
      .client
      .patch(&url)
      .header(header::USER_AGENT, USER_AGENT)
      .json(&request)
      .send()
      .await
      .map_err(transport_error)?;

    read_issue(response).await
  }

  /// List issues matching the state filter.
  ///
  /// A single page of at most 100 issues; larger result sets are
  /// truncated.
  pub async fn list_issues(&self, owner: &str, repo: &str, state: StateFilter) -> Result<Vec<Issue>> {
    let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);

    debug!(owner, repo, state = state.as_str(), "listing issues");

    let response = self
      .client
      .get(&url)
      .header(header::USER_AGENT, USER_AGENT)
      .query(&[
        ("access_token", self.token.as_str()),
        ("state", state.as_str()),
        ("per_page", "100"),
      ])
      .send()
      .await
      .map_err(transport_error)?;

    if !response.status().is_success() {
      return Err(api_error(response).await);
    }

    let issues = response.json::<Vec<GiteeIssue>>().await.map_err(transport_error)?;
    Ok(issues.into_iter().map(Issue::from).collect())
  }
}

fn transport_error(err: reqwest::Error) -> Error {
  Error::PlatformApi {
    platform: Platform::Gitee,
    message: err.to_string(),
  }
}

async fn read_issue(response: Response) -> Result<Issue> {
  if !response.status().is_success() {
    return Err(api_error(response).await);
  }

  let issue = response.json::<GiteeIssue>().await.map_err(transport_error)?;
  Ok(issue.into())
}

/// Build the normalized error from a failed response: the API's reported
/// message when present, the HTTP status otherwise.
async fn api_error(response: Response) -> Error {
  let status = response.status();
  let message = response
    .json::<ApiErrorBody>()
    .await
    .ok()
    .and_then(|body| body.message)
    .unwrap_or_else(|| format!("HTTP {status}"));

  Error::PlatformApi {
    platform: Platform::Gitee,
    message,
  }
}
