//! # List Command
//!
//! Lists issues in the resolved repository, one page of at most 100.

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use tick_core::StateFilter;
use tick_core::output::{print_header, print_warning};
use tokio::runtime::Runtime;

use super::{TargetArgs, print_issue, resolve_target, spinner};
use crate::clients::create_client;

/// Command for listing issues
#[derive(Args)]
pub struct ListArgs {
  #[command(flatten)]
  pub target: TargetArgs,

  /// Filter by state
  #[arg(short = 's', long, value_enum, default_value_t = StateFilter::Open)]
  pub state: StateFilter,
}

pub(crate) fn handle_list_command(args: ListArgs) -> Result<()> {
  let target = resolve_target(&args.target)?;
  let client = create_client(&target.platform, &target.token)?;

  let rt = Runtime::new()?;
  let bar = spinner("Fetching issues...");
  let result = rt.block_on(client.list_issues(&target.owner, &target.repo, args.state));
  bar.finish_and_clear();

  let issues = result?;
  if issues.is_empty() {
    print_warning(&format!("No {} issues found.", args.state));
    return Ok(());
  }

  print_header(&format!(
    "Issues in {}/{} ({}): {}",
    target.owner,
    target.repo,
    args.state,
    issues.len()
  ));
  println!("{}", "─".repeat(60).dimmed());
  for issue in &issues {
    print_issue(issue);
    println!();
  }

  Ok(())
}
