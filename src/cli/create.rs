//! # Create Command
//!
//! Creates a new issue on the resolved repository and prints the
//! normalized result.

use anyhow::Result;
use clap::Args;
use tick_core::output::print_success;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{TargetArgs, print_issue, resolve_target, spinner, split_labels};
use crate::clients::create_client;

/// Command for creating an issue
#[derive(Args)]
pub struct CreateArgs {
  #[command(flatten)]
  pub target: TargetArgs,

  /// Issue title
  #[arg(short = 't', long)]
  pub title: String,

  /// Issue description
  #[arg(short = 'd', long, default_value = "")]
  pub description: String,

  /// Comma-separated labels
  #[arg(short = 'l', long)]
  pub labels: Option<String>,
}

pub(crate) fn handle_create_command(args: CreateArgs) -> Result<()> {
  let target = resolve_target(&args.target)?;
  let client = create_client(&target.platform, &target.token)?;
  let labels = split_labels(args.labels.as_deref());

  debug!(platform = %client.platform(), owner = %target.owner, repo = %target.repo, "resolved issue target");

  let rt = Runtime::new()?;
  let bar = spinner("Creating issue...");
  let result = rt.block_on(client.create_issue(&target.owner, &target.repo, &args.title, &args.description, &labels));
  bar.finish_and_clear();

  let issue = result?;
  print_success("Issue created successfully!");
  print_issue(&issue);
  Ok(())
}
