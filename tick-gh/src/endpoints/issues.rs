//! Issue operations against the GitHub-style API.
//!
//! The backend only knows `open` and `closed`, so an update asking for
//! `progressing` is transmitted as `open`. Every transport or API failure
//! is normalized to [`Error::PlatformApi`] before it leaves this module.

use reqwest::{Response, header};
use tick_core::{Error, Issue, IssueState, IssueUpdate, Platform, Result, StateFilter, sanitize_labels};
use tracing::debug;

use crate::client::GitHubClient;
use crate::consts::{ACCEPT, USER_AGENT};
use crate::models::{ApiErrorBody, CreateIssueRequest, GitHubIssue, UpdateIssueRequest};

impl GitHubClient {
  /// Create a new issue. Blank labels are dropped before transmission;
  /// an empty label set is legal.
  pub async fn create_issue(&self, owner: &str, repo: &str, title: &str, body: &str, labels: &[String]) -> Result<Issue> {
    let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
    let request = CreateIssueRequest {
      title: title.to_string(),
      body: body.to_string(),
      labels: sanitize_labels(labels),
    };

    debug!(owner, repo, "creating issue");

    let response = self
      .request(self.client.post(&url))
      .json(&request)
      .send()
      .await
      .map_err(transport_error)?;

    read_issue(response).await
  }

  /// Apply a partial update to an existing issue.
  ///
  /// Only provided fields are transmitted. A requested `progressing` state
  /// becomes `open` on the wire since this backend has no in-progress
  /// state; a non-empty label set replaces the issue's labels wholesale.
  pub async fn update_issue(&self, owner: &str, repo: &str, number: u64, update: &IssueUpdate) -> Result<Issue> {
    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);
    let labels = sanitize_labels(&update.labels);
    let request = UpdateIssueRequest {
      title: update.title.clone(),
      body: update.body.clone(),
      state: update.state.map(|state| match state {
        IssueState::Progressing => IssueState::Open.as_str(),
        other => other.as_str(),
      }),
      labels: if labels.is_empty() { None } else { Some(labels) },
    };

    debug!(owner, repo, number, "updating issue");

    let response = self
      .request(self.client.patch(&url))
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
      .request(self.client.get(&url))
      .query(&[("state", state.as_str()), ("per_page", "100")])
      .send()
      .await
      .map_err(transport_error)?;

    if !response.status().is_success() {
      return Err(api_error(response).await);
    }

    let issues = response.json::<Vec<GitHubIssue>>().await.map_err(transport_error)?;
    Ok(issues.into_iter().map(Issue::from).collect())
  }

  fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT)
      .header(header::AUTHORIZATION, format!("token {}", self.token))
  }
}

fn transport_error(err: reqwest::Error) -> Error {
  Error::PlatformApi {
    platform: Platform::GitHub,
    message: err.to_string(),
  }
}

async fn read_issue(response: Response) -> Result<Issue> {
  if !response.status().is_success() {
    return Err(api_error(response).await);
  }

  let issue = response.json::<GitHubIssue>().await.map_err(transport_error)?;
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
    platform: Platform::GitHub,
    message,
  }
}
