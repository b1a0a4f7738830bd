//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the tick tool. The
//! commands are thin plumbing: they resolve credentials (saved
//! configuration or raw flags), hand the call to the platform client, and
//! render whatever comes back.

mod config;
mod create;
mod list;
mod update;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tick_core::output::{ColorMode, format_issue_state};
use tick_core::{ConfigDirs, Error, Issue};
use tick_store::SecretStore;

/// Top-level CLI command for the tick tool
#[derive(Parser)]
#[command(name = "tick")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Manage issues across GitHub and Gitee from one CLI")]
#[command(
  long_about = "Tick creates, updates, and lists issues across GitHub-style and\n\
        Gitee-style trackers behind one interface. Repository credentials are\n\
        kept in an encrypted local store, so most commands only need a\n\
        configuration name."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the tick tool
#[derive(Subcommand)]
pub enum Commands {
  /// Create a new issue
  #[command(alias = "cr")]
  Create(create::CreateArgs),

  /// Update an existing issue
  #[command(alias = "u")]
  Update(update::UpdateArgs),

  /// List issues in a repository
  #[command(alias = "l")]
  List(list::ListArgs),

  /// Manage repository configurations
  #[command(alias = "c")]
  #[command(arg_required_else_help = true)]
  Config(config::ConfigArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always => owo_colors::set_override(true),
    ColorMode::Never => owo_colors::set_override(false),
    ColorMode::Auto => {}
  }

  match cli.command {
    Commands::Create(create) => create::handle_create_command(create),
    Commands::Update(update) => update::handle_update_command(update),
    Commands::List(list) => list::handle_list_command(list),
    Commands::Config(config) => config::handle_config_command(config),
  }
}

/// Flags shared by every command that talks to a tracker: either a saved
/// configuration name or the raw credential tuple.
#[derive(Args)]
pub(crate) struct TargetArgs {
  /// Use a saved configuration
  #[arg(short = 'c', long = "config", value_name = "NAME")]
  pub config: Option<String>,

  /// Repository owner
  #[arg(short = 'o', long)]
  pub owner: Option<String>,

  /// Repository name
  #[arg(short = 'r', long)]
  pub repo: Option<String>,

  /// Platform (github or gitee)
  #[arg(long)]
  pub platform: Option<String>,

  /// API token
  #[arg(long)]
  pub token: Option<String>,
}

/// A fully resolved call target.
#[derive(Debug)]
pub(crate) struct Target {
  pub owner: String,
  pub repo: String,
  pub platform: String,
  pub token: String,
}

/// Resolve a target from a saved configuration and/or raw flags; raw flags
/// win over saved values.
pub(crate) fn resolve_target(args: &TargetArgs) -> Result<Target> {
  let saved = match &args.config {
    Some(name) => {
      let store = SecretStore::open(&ConfigDirs::new()?)?;
      // Close the handle before acting on the lookup result so it is
      // released on the error path too.
      let lookup = store.get(name);
      store.close()?;
      Some(lookup?.ok_or_else(|| Error::NotFound(name.clone()))?)
    }
    None => None,
  };

  let owner = args.owner.clone().or_else(|| saved.as_ref().map(|c| c.owner.clone()));
  let repo = args.repo.clone().or_else(|| saved.as_ref().map(|c| c.repo.clone()));
  let platform = args
    .platform
    .clone()
    .or_else(|| saved.as_ref().map(|c| c.platform.as_str().to_string()));
  let token = args.token.clone().or_else(|| saved.as_ref().and_then(|c| c.token.clone()));

  match (owner, repo, platform, token) {
    (Some(owner), Some(repo), Some(platform), Some(token)) => Ok(Target {
      owner,
      repo,
      platform,
      token,
    }),
    _ => Err(
      Error::Validation(
        "missing required parameters: provide --config or all of --owner, --repo, --platform, --token".to_string(),
      )
      .into(),
    ),
  }
}

/// Split a comma-separated label flag into trimmed entries.
pub(crate) fn split_labels(raw: Option<&str>) -> Vec<String> {
  match raw {
    Some(raw) => raw.split(',').map(|label| label.trim().to_string()).collect(),
    None => Vec::new(),
  }
}

/// A spinner for the single network call a command makes.
pub(crate) fn spinner(message: &str) -> ProgressBar {
  let bar = ProgressBar::new_spinner();
  if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
    bar.set_style(style);
  }
  bar.set_message(message.to_string());
  bar.enable_steady_tick(std::time::Duration::from_millis(80));
  bar
}

/// Render one normalized issue.
pub(crate) fn print_issue(issue: &Issue) {
  println!("{} {}", format!("#{}", issue.number).cyan(), issue.title);
  println!("  State: {}", format_issue_state(&issue.state));
  if !issue.labels.is_empty() {
    println!("  Labels: {}", issue.labels.join(", ").magenta());
  }
  println!("  URL: {}", issue.url.blue());
}
