//! # Tick Core Library
//!
//! Shared vocabulary for the tick workspace: the normalized issue model,
//! the platform identifier set, the error taxonomy, configuration
//! directories, and terminal output helpers. The store and the platform
//! adapter crates all speak in these types so the CLI never sees a
//! platform-specific shape.

pub mod config;
pub mod error;
pub mod issue;
pub mod output;
pub mod platform;

pub use config::ConfigDirs;
pub use error::{Error, Result};
pub use issue::{Issue, IssueState, IssueUpdate, StateFilter, sanitize_labels};
pub use output::{ColorMode, print_error, print_header, print_success, print_warning};
pub use platform::Platform;
