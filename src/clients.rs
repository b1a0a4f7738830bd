//! # Client Factory
//!
//! Selects the concrete platform adapter for a platform identifier and
//! wraps the two adapters behind one uniform issue contract. The platform
//! set is closed, so the contract is an enum rather than a trait object;
//! the variant is chosen once at construction time.

use tick_core::{Issue, IssueUpdate, Platform, Result, StateFilter};
use tick_gh::GitHubClient;
use tick_gitee::GiteeClient;

/// A platform client behind the uniform contract: `create_issue`,
/// `update_issue`, `list_issues`.
#[derive(Debug)]
pub enum IssueClient {
  GitHub(GitHubClient),
  Gitee(GiteeClient),
}

/// Build the adapter for a platform identifier (case-insensitive).
///
/// Fails with [`tick_core::Error::UnsupportedPlatform`] for identifiers
/// outside the supported set, before any adapter state is constructed.
pub fn create_client(platform: &str, token: &str) -> Result<IssueClient> {
  Ok(match platform.parse::<Platform>()? {
    Platform::GitHub => IssueClient::GitHub(GitHubClient::new(token)),
    Platform::Gitee => IssueClient::Gitee(GiteeClient::new(token)),
  })
}

impl IssueClient {
  pub fn platform(&self) -> Platform {
    match self {
      IssueClient::GitHub(_) => Platform::GitHub,
      IssueClient::Gitee(_) => Platform::Gitee,
    }
  }

  pub async fn create_issue(&self, owner: &str, repo: &str, title: &str, body: &str, labels: &[String]) -> Result<Issue> {
    match self {
      IssueClient::GitHub(client) => client.create_issue(owner, repo, title, body, labels).await,
      IssueClient::Gitee(client) => client.create_issue(owner, repo, title, body, labels).await,
    }
  }

  pub async fn update_issue(&self, owner: &str, repo: &str, number: u64, update: &IssueUpdate) -> Result<Issue> {
    match self {
      IssueClient::GitHub(client) => client.update_issue(owner, repo, number, update).await,
      IssueClient::Gitee(client) => client.update_issue(owner, repo, number, update).await,
    }
  }

  pub async fn list_issues(&self, owner: &str, repo: &str, state: StateFilter) -> Result<Vec<Issue>> {
    match self {
      IssueClient::GitHub(client) => client.list_issues(owner, repo, state).await,
      IssueClient::Gitee(client) => client.list_issues(owner, repo, state).await,
    }
  }
}
