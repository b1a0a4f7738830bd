//! # Tick CLI Entry Point
//!
//! The main entry point for the tick command-line tool: create, update,
//! and list issues across GitHub-style and Gitee-style trackers using
//! credentials from the encrypted local store.

use clap::Parser;
use tick_core::output::print_error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod clients;

fn main() {
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  if let Err(err) = cli::handle_cli(cmd) {
    print_error(&format!("{err:#}"));
    std::process::exit(1);
  }
}
