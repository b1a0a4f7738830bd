//! # Configuration Directories
//!
//! Resolves the private data directory that holds the credential database
//! and its encryption key file. The directory is owner-only on Unix since
//! everything inside it is credential material.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::Result;

/// Directory layout for tick's on-disk state.
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  data_dir: PathBuf,
}

impl ConfigDirs {
  /// Resolve the per-user data directory via the platform conventions
  /// (XDG on Linux).
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "tick").ok_or_else(|| {
      io::Error::new(
        io::ErrorKind::NotFound,
        "could not determine a home directory for tick's data",
      )
    })?;

    Ok(Self {
      data_dir: proj_dirs.data_dir().to_path_buf(),
    })
  }

  /// Use an explicit root instead of the per-user location. Tests and
  /// scripts point this at a temporary directory.
  pub fn at<P: AsRef<Path>>(root: P) -> Self {
    Self {
      data_dir: root.as_ref().to_path_buf(),
    }
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  /// Path of the SQLite database holding repository configurations.
  pub fn db_path(&self) -> PathBuf {
    self.data_dir.join("store.db")
  }

  /// Path of the hex-encoded 256-bit encryption key file.
  pub fn key_path(&self) -> PathBuf {
    self.data_dir.join("store.key")
  }

  /// Create the data directory if needed, owner-only on Unix.
  pub fn init(&self) -> Result<()> {
    fs::create_dir_all(&self.data_dir)?;

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      fs::set_permissions(&self.data_dir, fs::Permissions::from_mode(0o700))?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_paths_live_under_the_data_dir() {
    let dirs = ConfigDirs::at("/tmp/tick-test");
    assert_eq!(dirs.db_path(), PathBuf::from("/tmp/tick-test/store.db"));
    assert_eq!(dirs.key_path(), PathBuf::from("/tmp/tick-test/store.key"));
  }

  #[test]
  fn test_init_creates_private_directory() {
    let temp = tempfile::tempdir().unwrap();
    let dirs = ConfigDirs::at(temp.path().join("data"));

    dirs.init().unwrap();
    assert!(dirs.data_dir().is_dir());

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      let mode = fs::metadata(dirs.data_dir()).unwrap().permissions().mode();
      assert_eq!(mode & 0o777, 0o700);
    }
  }
}
