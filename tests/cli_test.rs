//! CLI smoke tests for the tick binary.
//!
//! Store-backed commands run against an isolated data directory via
//! `XDG_DATA_HOME`, so nothing touches the real user store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tick_in(home: &TempDir) -> Command {
  let mut cmd = Command::cargo_bin("tick").expect("tick binary should build");
  cmd
    .env("HOME", home.path())
    .env("XDG_DATA_HOME", home.path().join("data"))
    .env("NO_COLOR", "1");
  cmd
}

#[test]
fn test_help_lists_commands() {
  let mut cmd = Command::cargo_bin("tick").expect("tick binary should build");
  cmd
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("create"))
    .stdout(predicate::str::contains("update"))
    .stdout(predicate::str::contains("list"))
    .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_add_list_remove_round_trip() {
  let home = TempDir::new().expect("temp home");

  tick_in(&home)
    .args([
      "config", "add", "--name", "prod", "--platform", "github", "--owner", "acme", "--repo", "widgets", "--token",
      "tok123",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("saved successfully"));

  // Listing shows the configuration but never the token.
  tick_in(&home)
    .args(["config", "list"])
    .assert()
    .success()
    .stdout(predicate::str::contains("prod"))
    .stdout(predicate::str::contains("acme/widgets"))
    .stdout(predicate::str::contains("tok123").not());

  tick_in(&home)
    .args(["config", "remove", "prod"])
    .assert()
    .success()
    .stdout(predicate::str::contains("removed successfully"));

  // Removing again reports absence without failing.
  tick_in(&home)
    .args(["config", "remove", "prod"])
    .assert()
    .success()
    .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_config_add_rejects_unknown_platform() {
  let home = TempDir::new().expect("temp home");

  tick_in(&home)
    .args([
      "config", "add", "--name", "bad", "--platform", "gitlab", "--owner", "acme", "--repo", "widgets", "--token",
      "tok123",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("✗"))
    .stderr(predicate::str::contains("unsupported platform"));
}

#[test]
fn test_update_with_blank_title_has_nothing_to_send() {
  let home = TempDir::new().expect("temp home");

  // A blank title counts as omitted, so no request is attempted.
  tick_in(&home)
    .args([
      "update", "--number", "7", "--title", "", "--owner", "acme", "--repo", "widgets", "--platform", "github",
      "--token", "tok123",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_create_requires_a_full_target() {
  let home = TempDir::new().expect("temp home");

  tick_in(&home)
    .args(["create", "--title", "Crash on save", "--owner", "acme"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing required parameters"));
}

#[test]
fn test_create_with_missing_config_name_fails() {
  let home = TempDir::new().expect("temp home");

  tick_in(&home)
    .args(["create", "--title", "Crash on save", "--config", "nope"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("'nope' not found"));
}
