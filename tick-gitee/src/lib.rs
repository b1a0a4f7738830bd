//! # Gitee-style API Adapter
//!
//! Translates the uniform issue contract into the Gitee REST wire
//! protocol. Unlike the GitHub-style backend, the token travels as an
//! `access_token` parameter on every request, labels are one comma-joined
//! string, and the three-state vocabulary (`open`, `progressing`,
//! `closed`) is native and passes through unchanged.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use client::GiteeClient;
// Re-export models
pub use models::{GiteeIssue, GiteeLabel};
