//! # GitHub-style HTTP Client
//!
//! Holds the reqwest client, the base endpoint, and the bearer token. The
//! issue operations live in [`crate::endpoints`].

use reqwest::Client;

use crate::consts::API_BASE_URL;

/// A client for one GitHub-style backend, bound to one token.
#[derive(Debug)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) token: String,
}

impl GitHubClient {
  /// Create a new client against the fixed production endpoint.
  pub fn new(token: &str) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE_URL.to_string(),
      token: token.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let client = GitHubClient::new("test_token");

    assert_eq!(client.base_url, API_BASE_URL);
    assert_eq!(client.token, "test_token");
  }
}
