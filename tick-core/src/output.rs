//! # Output Formatting
//!
//! Formatted output helpers with colors and consistent styling for
//! user-facing terminal messages.

use owo_colors::OwoColorize;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", header.blue().bold());
}

/// Color an issue state the way the trackers do: open green, closed red,
/// anything else (progressing) yellow.
pub fn format_issue_state(state: &str) -> String {
  match state {
    "open" => state.green().to_string(),
    "closed" => state.red().to_string(),
    _ => state.yellow().to_string(),
  }
}
