//! Wire-format models for the GitHub-style API and their normalization
//! into the shared [`Issue`] shape.

use serde::{Deserialize, Serialize};
use tick_core::Issue;

/// An issue as returned by the GitHub-style API.
#[derive(Debug, Deserialize)]
pub struct GitHubIssue {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub html_url: String,
  #[serde(default)]
  pub labels: Vec<GitHubLabel>,
}

/// A label object; normalization flattens it to its name.
#[derive(Debug, Deserialize)]
pub struct GitHubLabel {
  pub name: String,
}

impl From<GitHubIssue> for Issue {
  fn from(issue: GitHubIssue) -> Self {
    Issue {
      number: issue.number,
      title: issue.title,
      state: issue.state,
      url: issue.html_url,
      labels: issue.labels.into_iter().map(|label| label.name).collect(),
    }
  }
}

/// Request body for issue creation. Labels travel as a JSON string array.
#[derive(Debug, Serialize)]
pub(crate) struct CreateIssueRequest {
  pub title: String,
  pub body: String,
  pub labels: Vec<String>,
}

/// Request body for a partial issue update; omitted fields are left
/// untouched server-side.
#[derive(Debug, Default, Serialize)]
pub(crate) struct UpdateIssueRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub labels: Option<Vec<String>>,
}

/// Error body shape; the API reports a human-readable `message`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
  pub message: Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_issue_normalization_flattens_labels() {
    let raw: GitHubIssue = serde_json::from_value(json!({
      "number": 42,
      "title": "Crash on save",
      "state": "open",
      "html_url": "https://example.com/acme/widgets/issues/42",
      "labels": [{"name": "bug"}, {"name": "ui"}]
    }))
    .unwrap();

    let issue = Issue::from(raw);
    assert_eq!(issue.number, 42);
    assert_eq!(issue.labels, vec!["bug", "ui"]);
    assert_eq!(issue.url, "https://example.com/acme/widgets/issues/42");
  }

  #[test]
  fn test_issue_without_labels_deserializes() {
    let raw: GitHubIssue = serde_json::from_value(json!({
      "number": 7,
      "title": "No labels",
      "state": "closed",
      "html_url": "https://example.com/i/7"
    }))
    .unwrap();

    assert!(Issue::from(raw).labels.is_empty());
  }

  #[test]
  fn test_update_request_omits_unset_fields() {
    let request = UpdateIssueRequest {
      state: Some("open"),
      ..Default::default()
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({"state": "open"}));
  }
}
