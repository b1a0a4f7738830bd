//! # Gitee-style HTTP Client
//!
//! Holds the reqwest client, the base endpoint, and the access token. The
//! issue operations live in [`crate::endpoints`].

use reqwest::Client;

use crate::consts::API_BASE_URL;

/// A client for one Gitee-style backend, bound to one token.
#[derive(Debug)]
pub struct GiteeClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) token: String,
}

impl GiteeClient {
  /// Create a new client against the fixed production endpoint.
  pub fn new(token: &str) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE_URL.to_string(),
      token: token.to_string(),
    }
  }
}
