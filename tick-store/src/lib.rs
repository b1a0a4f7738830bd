//! # Tick Secret Store
//!
//! Durable, at-rest-encrypted storage of repository configurations, keyed
//! by name. Only the access token is encrypted; the rest of a configuration
//! stays queryable without touching key material.
//!
//! The store is one SQLite file plus a sibling key file, both under tick's
//! private data directory. Concurrent processes against the same store are
//! not coordinated beyond SQLite's own locking; simultaneous writers are
//! undefined behavior.

pub mod crypto;
pub mod store;

pub use crypto::EncryptionKey;
pub use store::{RepositoryConfig, SecretStore};
