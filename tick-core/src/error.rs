//! # Error Taxonomy
//!
//! Every failure the core can produce, as one enum. The CLI boundary wraps
//! these in `anyhow` for rendering; nothing in the core retries, swallows,
//! or exits the process.

use thiserror::Error;

use crate::platform::Platform;

/// Convenience alias used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the credential store and the platform clients.
#[derive(Debug, Error)]
pub enum Error {
  /// A named configuration does not exist in the store.
  #[error("configuration '{0}' not found")]
  NotFound(String),

  /// Stored ciphertext could not be decrypted under the current key.
  ///
  /// This is distinct from [`Error::CorruptRecord`]: the stored value is
  /// well-formed but was produced under a different encryption key, most
  /// likely because the key file was replaced.
  #[error("failed to decrypt stored token; the encryption key may have changed")]
  Decryption,

  /// A stored value is malformed or truncated and cannot be interpreted.
  #[error("stored record is corrupt: {0}")]
  CorruptRecord(String),

  /// The platform identifier is outside the supported set.
  #[error("unsupported platform: '{0}' (expected 'github' or 'gitee')")]
  UnsupportedPlatform(String),

  /// A caller-supplied value failed up-front validation.
  #[error("{0}")]
  Validation(String),

  /// A transport or API failure from a platform, normalized to one shape.
  #[error("{platform} API error: {message}")]
  PlatformApi {
    platform: Platform,
    message: String,
  },

  /// An underlying database failure in the credential store.
  #[error("database error: {0}")]
  Database(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}
