//! # GitHub-style API Adapter
//!
//! Translates the uniform issue contract (create, update, list) into the
//! GitHub REST wire protocol: bearer-style `Authorization` header, labels
//! as a JSON string array, and a two-state issue vocabulary (`progressing`
//! is mapped to `open` before transmission).

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use client::GitHubClient;
// Re-export models
pub use models::{GitHubIssue, GitHubLabel};
