//! # Normalized Issue Model
//!
//! The platform adapters translate their wire formats into these types so
//! callers above the abstraction never handle a platform-specific shape.
//! Issues are transient results of API calls and are never persisted.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// The normalized result of any platform issue operation.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
  /// Platform-assigned issue number.
  pub number: u64,
  pub title: String,
  /// The state as reported by the platform (Gitee may report `progressing`).
  pub state: String,
  pub url: String,
  /// Label names, in platform order. Label objects are flattened to names.
  pub labels: Vec<String>,
}

/// The shared three-value state vocabulary for issue updates.
///
/// Every caller validates against this vocabulary up front, independent of
/// which backend eventually receives the update. The GitHub-style backend
/// has no `progressing` state; its adapter maps it to `open` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IssueState {
  Open,
  Progressing,
  Closed,
}

impl IssueState {
  pub const fn as_str(&self) -> &'static str {
    match self {
      IssueState::Open => "open",
      IssueState::Progressing => "progressing",
      IssueState::Closed => "closed",
    }
  }
}

impl fmt::Display for IssueState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for IssueState {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "open" => Ok(IssueState::Open),
      "progressing" => Ok(IssueState::Progressing),
      "closed" => Ok(IssueState::Closed),
      _ => Err(Error::Validation(format!(
        "invalid state '{s}': use open, progressing, or closed"
      ))),
    }
  }
}

/// State filter accepted by the list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StateFilter {
  #[default]
  Open,
  Closed,
  All,
}

impl StateFilter {
  pub const fn as_str(&self) -> &'static str {
    match self {
      StateFilter::Open => "open",
      StateFilter::Closed => "closed",
      StateFilter::All => "all",
    }
  }
}

impl fmt::Display for StateFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Partial update for an existing issue.
///
/// Fields left as `None` are not transmitted, so the server keeps the
/// current values. A non-empty `labels` replaces the full label set.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
  pub title: Option<String>,
  pub body: Option<String>,
  pub state: Option<IssueState>,
  pub labels: Vec<String>,
}

impl IssueUpdate {
  /// Whether the update carries no changes at all.
  pub fn is_empty(&self) -> bool {
    self.title.is_none() && self.body.is_none() && self.state.is_none() && self.labels.is_empty()
  }
}

/// Drop empty and whitespace-only label entries, preserving order.
///
/// Both adapters sanitize labels before transmission; kept labels are not
/// trimmed, only blank entries are removed.
pub fn sanitize_labels(labels: &[String]) -> Vec<String> {
  labels
    .iter()
    .filter(|label| !label.trim().is_empty())
    .cloned()
    .collect()
}
