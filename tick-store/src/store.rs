//! # Repository Configuration Store
//!
//! One SQLite table of named repository configurations, with the access
//! token encrypted at rest and everything else stored in the clear so
//! listing never needs key material.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use tick_core::{ConfigDirs, Error, Platform, Result};
use tracing::debug;

use crate::crypto::EncryptionKey;

/// A named, durable credential bundle for one repository.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
  pub id: i64,
  pub name: String,
  pub platform: Platform,
  pub owner: String,
  pub repo: String,
  /// Decrypted token from [`SecretStore::get`]; redacted to `None` in
  /// [`SecretStore::list`] results.
  pub token: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// The encrypted credential store.
///
/// Dropping the store releases the database handle on every exit path;
/// [`SecretStore::close`] is the explicit variant for callers that want to
/// observe close failures.
pub struct SecretStore {
  conn: Connection,
  key: EncryptionKey,
}

trait DbResultExt<T> {
  fn db_err(self) -> Result<T>;
}

impl<T> DbResultExt<T> for rusqlite::Result<T> {
  fn db_err(self) -> Result<T> {
    self.map_err(|e| Error::Database(e.to_string()))
  }
}

impl SecretStore {
  /// Open the store under tick's data directory, creating the directory,
  /// database, and key file on first use.
  pub fn open(dirs: &ConfigDirs) -> Result<Self> {
    dirs.init()?;
    let key = EncryptionKey::load_or_create(&dirs.key_path())?;
    let conn = Connection::open(dirs.db_path()).db_err()?;
    Self::with_connection(conn, key)
  }

  /// Open a store at an explicit database path with a caller-supplied key.
  pub fn open_at<P: AsRef<Path>>(db_path: P, key: EncryptionKey) -> Result<Self> {
    let conn = Connection::open(db_path).db_err()?;
    Self::with_connection(conn, key)
  }

  /// An in-memory store for tests.
  pub fn in_memory(key: EncryptionKey) -> Result<Self> {
    let conn = Connection::open_in_memory().db_err()?;
    Self::with_connection(conn, key)
  }

  fn with_connection(conn: Connection, key: EncryptionKey) -> Result<Self> {
    conn
      .execute(
        "CREATE TABLE IF NOT EXISTS repositories (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          name TEXT UNIQUE NOT NULL,
          platform TEXT NOT NULL,
          owner TEXT NOT NULL,
          repo TEXT NOT NULL,
          token TEXT NOT NULL,
          created_at TEXT NOT NULL
        )",
        [],
      )
      .db_err()?;

    Ok(Self { conn, key })
  }

  /// Upsert a configuration keyed by `name`, encrypting the token.
  ///
  /// Saving over an existing name replaces the whole row, including a
  /// fresh `created_at`. Returns the row id.
  pub fn save(&self, name: &str, platform: Platform, owner: &str, repo: &str, token: &str) -> Result<i64> {
    let encrypted = self.key.encrypt(token);
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    self
      .conn
      .execute(
        "INSERT OR REPLACE INTO repositories (name, platform, owner, repo, token, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![name, platform.as_str(), owner, repo, encrypted, created_at],
      )
      .db_err()?;

    debug!(name, platform = platform.as_str(), "saved repository configuration");
    Ok(self.conn.last_insert_rowid())
  }

  /// Fetch a configuration by name, decrypting the stored token.
  ///
  /// Returns `Ok(None)` when no such name exists; a token that cannot be
  /// decrypted under the current key is an error, not absence.
  pub fn get(&self, name: &str) -> Result<Option<RepositoryConfig>> {
    let row = self
      .conn
      .query_row(
        "SELECT id, name, platform, owner, repo, token, created_at
         FROM repositories WHERE name = ?1",
        params![name],
        |row| {
          Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
          ))
        },
      )
      .optional()
      .db_err()?;

    let Some((id, name, platform, owner, repo, token, created_at)) = row else {
      return Ok(None);
    };

    Ok(Some(RepositoryConfig {
      id,
      name,
      platform: platform.parse()?,
      owner,
      repo,
      token: Some(self.key.decrypt(&token)?),
      created_at: parse_timestamp(&created_at)?,
    }))
  }

  /// List all configurations, newest first, with tokens redacted.
  pub fn list(&self) -> Result<Vec<RepositoryConfig>> {
    let mut stmt = self
      .conn
      .prepare(
        "SELECT id, name, platform, owner, repo, created_at
         FROM repositories ORDER BY created_at DESC, id DESC",
      )
      .db_err()?;

    let rows = stmt
      .query_map([], |row| {
        Ok((
          row.get::<_, i64>(0)?,
          row.get::<_, String>(1)?,
          row.get::<_, String>(2)?,
          row.get::<_, String>(3)?,
          row.get::<_, String>(4)?,
          row.get::<_, String>(5)?,
        ))
      })
      .db_err()?;

    let mut configs = Vec::new();
    for row in rows {
      let (id, name, platform, owner, repo, created_at) = row.db_err()?;
      configs.push(RepositoryConfig {
        id,
        name,
        platform: platform.parse()?,
        owner,
        repo,
        token: None,
        created_at: parse_timestamp(&created_at)?,
      });
    }

    Ok(configs)
  }

  /// Delete a configuration by name. Returns the number of rows removed
  /// (0 or 1).
  pub fn delete(&self, name: &str) -> Result<usize> {
    let removed = self
      .conn
      .execute("DELETE FROM repositories WHERE name = ?1", params![name])
      .db_err()?;

    debug!(name, removed, "deleted repository configuration");
    Ok(removed)
  }

  /// Explicitly release the database handle.
  pub fn close(self) -> Result<()> {
    self.conn.close().map_err(|(_, e)| Error::Database(e.to_string()))
  }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(raw)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| Error::CorruptRecord(format!("bad created_at timestamp: {e}")))
}

#[cfg(test)]
mod tests {
  use std::thread::sleep;
  use std::time::Duration;

  use super::*;

  fn test_store() -> SecretStore {
    SecretStore::in_memory(EncryptionKey::from_bytes([7u8; 32])).unwrap()
  }

  #[test]
  fn test_save_then_get_round_trip() {
    let store = test_store();
    let before = Utc::now();

    store.save("prod", Platform::GitHub, "acme", "widgets", "tok123").unwrap();

    let config = store.get("prod").unwrap().unwrap();
    assert_eq!(config.name, "prod");
    assert_eq!(config.platform, Platform::GitHub);
    assert_eq!(config.owner, "acme");
    assert_eq!(config.repo, "widgets");
    assert_eq!(config.token.as_deref(), Some("tok123"));
    assert!(config.created_at >= before - chrono::Duration::seconds(1));
    assert!(config.created_at <= Utc::now());
  }

  #[test]
  fn test_get_missing_name_is_absent() {
    let store = test_store();
    assert!(store.get("nope").unwrap().is_none());
  }

  #[test]
  fn test_upsert_keeps_one_row_and_last_values_win() {
    let store = test_store();
    store.save("prod", Platform::GitHub, "acme", "widgets", "tok1").unwrap();
    store.save("prod", Platform::Gitee, "acme", "gadgets", "tok2").unwrap();

    let configs = store.list().unwrap();
    assert_eq!(configs.len(), 1);

    let config = store.get("prod").unwrap().unwrap();
    assert_eq!(config.platform, Platform::Gitee);
    assert_eq!(config.repo, "gadgets");
    assert_eq!(config.token.as_deref(), Some("tok2"));
  }

  #[test]
  fn test_upsert_resets_created_at() {
    let store = test_store();
    store.save("prod", Platform::GitHub, "acme", "widgets", "tok1").unwrap();
    let first = store.get("prod").unwrap().unwrap().created_at;

    sleep(Duration::from_millis(5));
    store.save("prod", Platform::GitHub, "acme", "widgets", "tok2").unwrap();
    let second = store.get("prod").unwrap().unwrap().created_at;

    assert!(second > first);
  }

  #[test]
  fn test_list_is_redacted_and_newest_first() {
    let store = test_store();
    store.save("alpha", Platform::GitHub, "a", "one", "tok-a").unwrap();
    sleep(Duration::from_millis(5));
    store.save("beta", Platform::Gitee, "b", "two", "tok-b").unwrap();

    let configs = store.list().unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].name, "beta");
    assert_eq!(configs[1].name, "alpha");
    assert!(configs.iter().all(|c| c.token.is_none()));
  }

  #[test]
  fn test_delete_reports_row_count() {
    let store = test_store();
    assert_eq!(store.delete("missing").unwrap(), 0);

    store.save("prod", Platform::GitHub, "acme", "widgets", "tok1").unwrap();
    assert_eq!(store.delete("prod").unwrap(), 1);
    assert!(store.get("prod").unwrap().is_none());
  }

  #[test]
  fn test_key_replacement_surfaces_decryption_error() {
    let temp = tempfile::tempdir().unwrap();
    let db_path = temp.path().join("store.db");

    let store = SecretStore::open_at(&db_path, EncryptionKey::from_bytes([1u8; 32])).unwrap();
    store.save("prod", Platform::GitHub, "acme", "widgets", "tok123").unwrap();
    store.close().unwrap();

    let reopened = SecretStore::open_at(&db_path, EncryptionKey::from_bytes([2u8; 32])).unwrap();
    assert!(matches!(reopened.get("prod").unwrap_err(), Error::Decryption));
  }

  #[test]
  fn test_tampered_token_is_a_corrupt_record() {
    let store = test_store();
    store.save("prod", Platform::GitHub, "acme", "widgets", "tok123").unwrap();

    store
      .conn
      .execute("UPDATE repositories SET token = 'garbage' WHERE name = 'prod'", [])
      .unwrap();

    assert!(matches!(store.get("prod").unwrap_err(), Error::CorruptRecord(_)));
  }

  #[test]
  fn test_close_releases_the_handle() {
    let store = test_store();
    store.save("prod", Platform::GitHub, "acme", "widgets", "tok123").unwrap();
    store.close().unwrap();
  }
}
