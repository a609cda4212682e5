//! Target platforms of a NEUIK build.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Operating system a NEUIK build targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  Linux,
  Osx,
  Windows,
}

impl Platform {
  pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Osx, Platform::Windows];

  /// Detect the host platform at runtime
  ///
  /// Returns `None` if the host OS is not a supported build platform
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::Osx),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Like [`Platform::current`], but reports an unsupported host as an error.
  pub fn host() -> Result<Self, ResolveError> {
    Self::current().ok_or_else(|| ResolveError::UnsupportedHost(std::env::consts::OS.to_string()))
  }

  /// Returns the lowercase string identifier for this platform
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::Osx => "osx",
      Self::Windows => "windows",
    }
  }

  /// Preprocessor token identifying the platform to the C sources.
  pub fn define(&self) -> &'static str {
    match self {
      Self::Linux => "PLATFORM_LINUX",
      Self::Osx => "PLATFORM_OSX",
      Self::Windows => "PLATFORM_WINDOWS",
    }
  }

  /// Suffix used by the platform-specific source files (`NEUIK_platform_<suffix>.c`).
  pub fn source_suffix(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::Osx => "darwin",
      Self::Windows => "windows",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Platform {
  type Err = ResolveError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "linux" => Ok(Self::Linux),
      "osx" | "macos" | "darwin" => Ok(Self::Osx),
      "windows" | "win32" => Ok(Self::Windows),
      _ => Err(ResolveError::UnsupportedPlatform(s.to_string())),
    }
  }
}
