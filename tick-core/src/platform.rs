//! # Platform Identifiers
//!
//! The closed set of supported issue-tracker backends. The set is fixed and
//! small, so it is an enum rather than an open registry.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A supported issue-tracker platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  /// GitHub-style API: bearer-token header, two-state issue vocabulary.
  GitHub,
  /// Gitee-style API: `access_token` parameter, three-state vocabulary.
  Gitee,
}

impl Platform {
  /// The lowercase identifier used on the CLI and in the store.
  pub const fn as_str(&self) -> &'static str {
    match self {
      Platform::GitHub => "github",
      Platform::Gitee => "gitee",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Platform::GitHub => "GitHub",
      Platform::Gitee => "Gitee",
    };
    write!(f, "{name}")
  }
}

impl FromStr for Platform {
  type Err = Error;

  /// Case-insensitive parse over the closed platform set.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "github" => Ok(Platform::GitHub),
      "gitee" => Ok(Platform::Gitee),
      _ => Err(Error::UnsupportedPlatform(s.to_string())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_is_case_insensitive() {
    assert_eq!("github".parse::<Platform>().unwrap(), Platform::GitHub);
    assert_eq!("GitHub".parse::<Platform>().unwrap(), Platform::GitHub);
    assert_eq!("GITEE".parse::<Platform>().unwrap(), Platform::Gitee);
  }

  #[test]
  fn test_parse_rejects_unknown_platform() {
    let err = "gitlab".parse::<Platform>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedPlatform(ref name) if name == "gitlab"));
  }

  #[test]
  fn test_identifier_round_trip() {
    for platform in [Platform::GitHub, Platform::Gitee] {
      assert_eq!(platform.as_str().parse::<Platform>().unwrap(), platform);
    }
  }
}
