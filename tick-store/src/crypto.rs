//! # Token Encryption
//!
//! AES-256-CBC encryption of stored access tokens. Each encryption call
//! uses a fresh random 16-byte IV, and the IV travels with the ciphertext
//! as `hex(iv):hex(ciphertext)`, so every stored record decrypts on its
//! own.

use std::fs;
use std::path::Path;

use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use rand::rngs::OsRng;
use tick_core::{Error, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Hex-encoded stored values are `iv ':' ciphertext`.
const SEPARATOR: char = ':';

/// A 256-bit symmetric key for token encryption.
///
/// The key is generated once, persisted hex-encoded in an owner-only file,
/// and loaded on every subsequent run. It is never rotated. **Losing the
/// key file permanently strands every token encrypted under it** — there
/// is no recovery path, and the store does not attempt one.
#[derive(Clone)]
pub struct EncryptionKey {
  bytes: [u8; 32],
}

impl EncryptionKey {
  /// Generate a fresh random key.
  pub fn generate() -> Self {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    Self { bytes }
  }

  /// Build a key from raw bytes. Tests use this to supply a fixed key
  /// without touching disk.
  pub const fn from_bytes(bytes: [u8; 32]) -> Self {
    Self { bytes }
  }

  /// Parse a hex-encoded key as stored in the key file.
  pub fn from_hex(encoded: &str) -> Result<Self> {
    let decoded =
      hex::decode(encoded.trim()).map_err(|e| Error::CorruptRecord(format!("key file is not valid hex: {e}")))?;
    let bytes: [u8; 32] = decoded
      .try_into()
      .map_err(|_| Error::CorruptRecord("key file does not hold a 256-bit key".to_string()))?;
    Ok(Self { bytes })
  }

  pub fn to_hex(&self) -> String {
    hex::encode(self.bytes)
  }

  /// Load the key from `path`, or generate and persist one if the file
  /// does not exist yet. The file is written owner-read/write only on
  /// Unix.
  pub fn load_or_create(path: &Path) -> Result<Self> {
    if path.exists() {
      return Self::from_hex(&fs::read_to_string(path)?);
    }

    let key = Self::generate();
    fs::write(path, key.to_hex())?;

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    Ok(key)
  }

  /// Encrypt a token, producing `hex(iv):hex(ciphertext)`.
  pub fn encrypt(&self, plaintext: &str) -> String {
    let mut iv = [0u8; 16];
    OsRng.fill_bytes(&mut iv);

    let ciphertext =
      Aes256CbcEnc::new(&self.bytes.into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    format!("{}{}{}", hex::encode(iv), SEPARATOR, hex::encode(ciphertext))
  }

  /// Decrypt a stored `hex(iv):hex(ciphertext)` value.
  ///
  /// Malformed or truncated values fail with [`Error::CorruptRecord`];
  /// well-formed values that do not decrypt under this key fail with
  /// [`Error::Decryption`].
  pub fn decrypt(&self, stored: &str) -> Result<String> {
    let (iv_hex, ciphertext_hex) = stored
      .split_once(SEPARATOR)
      .ok_or_else(|| Error::CorruptRecord("missing ':' separator".to_string()))?;

    let iv_bytes =
      hex::decode(iv_hex).map_err(|e| Error::CorruptRecord(format!("initialization vector is not hex: {e}")))?;
    let iv: [u8; 16] = iv_bytes
      .try_into()
      .map_err(|_| Error::CorruptRecord("initialization vector must be 16 bytes".to_string()))?;

    let ciphertext =
      hex::decode(ciphertext_hex).map_err(|e| Error::CorruptRecord(format!("ciphertext is not hex: {e}")))?;
    if ciphertext.is_empty() || ciphertext.len() % 16 != 0 {
      return Err(Error::CorruptRecord("ciphertext is truncated".to_string()));
    }

    let plaintext = Aes256CbcDec::new(&self.bytes.into(), &iv.into())
      .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
      .map_err(|_| Error::Decryption)?;

    String::from_utf8(plaintext).map_err(|_| Error::Decryption)
  }
}

impl std::fmt::Debug for EncryptionKey {
  // Key material stays out of logs and error chains.
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("EncryptionKey(..)")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn test_key() -> EncryptionKey {
    EncryptionKey::from_bytes([7u8; 32])
  }

  #[test]
  fn test_round_trip() {
    let key = test_key();
    for token in ["tok123", "", "ghp_abcDEF0123456789", "跨平台令牌"] {
      assert_eq!(key.decrypt(&key.encrypt(token)).unwrap(), token);
    }
  }

  #[test]
  fn test_fresh_iv_per_call() {
    let key = test_key();
    let first = key.encrypt("tok123");
    let second = key.encrypt("tok123");
    assert_ne!(first, second);

    let (first_iv, _) = first.split_once(':').unwrap();
    let (second_iv, _) = second.split_once(':').unwrap();
    assert_ne!(first_iv, second_iv);
    assert_eq!(first_iv.len(), 32);
  }

  #[test]
  fn test_missing_separator_is_corrupt() {
    let err = test_key().decrypt("deadbeef").unwrap_err();
    assert!(matches!(err, Error::CorruptRecord(_)));
  }

  #[test]
  fn test_non_hex_value_is_corrupt() {
    let err = test_key().decrypt("not-hex:zzzz").unwrap_err();
    assert!(matches!(err, Error::CorruptRecord(_)));
  }

  #[test]
  fn test_truncated_ciphertext_is_corrupt() {
    let key = test_key();
    let stored = key.encrypt("tok123");
    let truncated = &stored[..stored.len() - 2];
    assert!(matches!(key.decrypt(truncated).unwrap_err(), Error::CorruptRecord(_)));
  }

  #[test]
  fn test_wrong_key_is_a_decryption_error() {
    let stored = test_key().encrypt("tok123");
    let other = EncryptionKey::from_bytes([8u8; 32]);
    assert!(matches!(other.decrypt(&stored).unwrap_err(), Error::Decryption));
  }

  #[test]
  fn test_load_or_create_persists_the_key() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("store.key");

    let created = EncryptionKey::load_or_create(&path).unwrap();
    let loaded = EncryptionKey::load_or_create(&path).unwrap();
    assert_eq!(created.to_hex(), loaded.to_hex());

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      let mode = fs::metadata(&path).unwrap().permissions().mode();
      assert_eq!(mode & 0o777, 0o600);
    }
  }

  #[test]
  fn test_malformed_key_file_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("store.key");
    fs::write(&path, "tooshort").unwrap();

    assert!(matches!(
      EncryptionKey::load_or_create(&path).unwrap_err(),
      Error::CorruptRecord(_)
    ));
  }
}
