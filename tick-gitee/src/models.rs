//! Wire-format models for the Gitee-style API and their normalization
//! into the shared [`Issue`] shape.

use serde::{Deserialize, Serialize};
use tick_core::Issue;

/// An issue as returned by the Gitee-style API.
#[derive(Debug, Deserialize)]
pub struct GiteeIssue {
  pub number: u64,
  pub title: String,
  pub state: String,
  pub html_url: String,
  #[serde(default)]
  pub labels: Vec<GiteeLabel>,
}

/// A label object; normalization flattens it to its name.
#[derive(Debug, Deserialize)]
pub struct GiteeLabel {
  pub name: String,
}

impl From<GiteeIssue> for Issue {
  fn from(issue: GiteeIssue) -> Self {
    Issue {
      number: issue.number,
      title: issue.title,
      state: issue.state,
      url: issue.html_url,
      labels: issue.labels.into_iter().map(|label| label.name).collect(),
    }
  }
}

/// Request body for issue creation. The token rides in the body and
/// labels are one comma-joined string.
#[derive(Debug, Serialize)]
pub(crate) struct CreateIssueRequest {
  pub access_token: String,
  pub title: String,
  pub body: String,
  pub labels: String,
}

/// Request body for a partial issue update; omitted fields are left
/// untouched server-side. The token is always present.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateIssueRequest {
  pub access_token: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub labels: Option<String>,
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
    let raw: GiteeIssue = serde_json::from_value(json!({
      "number": 9,
      "title": "启动崩溃",
      "state": "progressing",
      "html_url": "https://example.com/acme/widgets/issues/9",
      "labels": [{"name": "bug"}]
    }))
    .unwrap();

    let issue = Issue::from(raw);
    assert_eq!(issue.state, "progressing");
    assert_eq!(issue.labels, vec!["bug"]);
  }

  #[test]
  fn test_update_request_keeps_token_and_omits_unset_fields() {
    let request = UpdateIssueRequest {
      access_token: "tok123".to_string(),
      title: None,
      body: None,
      state: Some("progressing"),
      labels: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({"access_token": "tok123", "state": "progressing"}));
  }
}
