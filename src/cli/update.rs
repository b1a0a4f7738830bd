//! # Update Command
//!
//! Applies a partial update to an existing issue. Only the provided
//! fields are sent; the state value is validated against the shared
//! vocabulary before any network traffic.

use anyhow::Result;
use clap::Args;
use tick_core::output::{print_success, print_warning};
use tick_core::{IssueState, IssueUpdate};
use tokio::runtime::Runtime;

use super::{TargetArgs, print_issue, resolve_target, spinner, split_labels};
use crate::clients::create_client;

/// Command for updating an issue
#[derive(Args)]
pub struct UpdateArgs {
  #[command(flatten)]
  pub target: TargetArgs,

  /// Issue number
  #[arg(short = 'n', long)]
  pub number: u64,

  /// New issue title
  #[arg(short = 't', long)]
  pub title: Option<String>,

  /// New issue description
  #[arg(short = 'd', long)]
  pub description: Option<String>,

  /// New issue state
  #[arg(short = 's', long, value_enum)]
  pub state: Option<IssueState>,

  /// Comma-separated labels (replaces the full label set)
  #[arg(short = 'l', long)]
  pub labels: Option<String>,
}

/// A blank value is treated the same as an omitted flag, so `--title ""`
/// never clears the title on the tracker.
fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn handle_update_command(args: UpdateArgs) -> Result<()> {
  let target = resolve_target(&args.target)?;
  let client = create_client(&target.platform, &target.token)?;

  let update = IssueUpdate {
    title: non_blank(args.title),
    body: non_blank(args.description),
    state: args.state,
    labels: split_labels(args.labels.as_deref()),
  };

  if update.is_empty() {
    print_warning("Nothing to update; provide --title, --description, --state, or --labels.");
    return Ok(());
  }

  let rt = Runtime::new()?;
  let bar = spinner("Updating issue...");
  let result = rt.block_on(client.update_issue(&target.owner, &target.repo, args.number, &update));
  bar.finish_and_clear();

  let issue = result?;
  print_success("Issue updated successfully!");
  print_issue(&issue);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_blank_fields_are_not_updates() {
    assert_eq!(non_blank(None), None);
    assert_eq!(non_blank(Some(String::new())), None);
    assert_eq!(non_blank(Some("   ".to_string())), None);
    assert_eq!(non_blank(Some("New title".to_string())), Some("New title".to_string()));
  }

  #[test]
  fn test_update_with_only_blank_fields_is_empty() {
    let update = IssueUpdate {
      title: non_blank(Some("".to_string())),
      body: non_blank(Some("  ".to_string())),
      state: None,
      labels: Vec::new(),
    };
    assert!(update.is_empty());
  }
}
