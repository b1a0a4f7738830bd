//! # Config Command
//!
//! Manages the named repository configurations in the encrypted store.
//! `add` prompts for anything not given as a flag, so it works both
//! scripted and interactively.

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{Input, Password, Select};
use owo_colors::OwoColorize;
use tick_core::output::{print_header, print_success, print_warning};
use tick_core::{ConfigDirs, Error, Platform};
use tick_store::SecretStore;

/// Command for configuration management
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ConfigSubcommands,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Add a new repository configuration
  #[command(alias = "a")]
  Add(AddArgs),

  /// List all repository configurations
  #[command(alias = "l")]
  List,

  /// Remove a repository configuration
  #[command(alias = "r")]
  Remove {
    /// Configuration name to remove
    name: String,
  },
}

/// Flags for `config add`; anything missing is prompted for.
#[derive(Args)]
pub struct AddArgs {
  /// Configuration name
  #[arg(short = 'n', long)]
  pub name: Option<String>,

  /// Platform (github or gitee)
  #[arg(short = 'p', long)]
  pub platform: Option<String>,

  /// Repository owner
  #[arg(short = 'o', long)]
  pub owner: Option<String>,

  /// Repository name
  #[arg(short = 'r', long)]
  pub repo: Option<String>,

  /// API token
  #[arg(short = 't', long)]
  pub token: Option<String>,
}

pub(crate) fn handle_config_command(config: ConfigArgs) -> Result<()> {
  match config.subcommand {
    ConfigSubcommands::Add(args) => handle_add_command(args),
    ConfigSubcommands::List => handle_list_command(),
    ConfigSubcommands::Remove { name } => handle_remove_command(&name),
  }
}

fn handle_add_command(args: AddArgs) -> Result<()> {
  let name = required("Configuration name", args.name)?;
  let platform = match args.platform {
    Some(platform) => platform,
    None => {
      let choices = [Platform::GitHub.as_str(), Platform::Gitee.as_str()];
      let index = Select::new().with_prompt("Select platform").items(&choices).default(0).interact()?;
      choices[index].to_string()
    }
  };
  let owner = required("Repository owner", args.owner)?;
  let repo = required("Repository name", args.repo)?;
  let token = match args.token {
    Some(token) => token,
    None => Password::new().with_prompt("API token").interact()?,
  };

  let platform: Platform = platform.parse()?;
  for (field, value) in [("name", &name), ("owner", &owner), ("repo", &repo), ("token", &token)] {
    if value.trim().is_empty() {
      return Err(Error::Validation(format!("{field} must not be empty")).into());
    }
  }

  let store = SecretStore::open(&ConfigDirs::new()?)?;
  let saved = store.save(&name, platform, &owner, &repo, &token);
  store.close()?;
  saved?;

  print_success(&format!("Configuration '{name}' saved successfully!"));
  Ok(())
}

fn handle_list_command() -> Result<()> {
  let store = SecretStore::open(&ConfigDirs::new()?)?;
  let listed = store.list();
  store.close()?;
  let configs = listed?;

  if configs.is_empty() {
    print_warning("No configurations found. Use \"config add\" to add one.");
    return Ok(());
  }

  print_header("Saved Configurations:");
  println!("{}", "─".repeat(60).dimmed());
  for config in configs {
    println!("{}", format!("Name: {}", config.name).cyan());
    println!("  Platform: {}", config.platform.as_str());
    println!("  Repository: {}/{}", config.owner, config.repo);
    println!("  Created: {}", config.created_at.format("%Y-%m-%d %H:%M"));
    println!();
  }

  Ok(())
}

fn handle_remove_command(name: &str) -> Result<()> {
  let store = SecretStore::open(&ConfigDirs::new()?)?;
  let deleted = store.delete(name);
  store.close()?;

  if deleted? > 0 {
    print_success(&format!("Configuration '{name}' removed successfully!"));
  } else {
    print_warning(&format!("Configuration '{name}' not found."));
  }

  Ok(())
}

fn required(prompt: &str, value: Option<String>) -> Result<String> {
  match value {
    Some(value) => Ok(value),
    None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
  }
}
