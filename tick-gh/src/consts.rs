//! Constants for the tick-gh client

/// Base URL for the GitHub-style REST API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the API client
pub const USER_AGENT: &str = concat!("tick-cli/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub-style API
pub const ACCEPT: &str = "application/vnd.github.v3+json";
