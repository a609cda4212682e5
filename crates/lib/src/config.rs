//! Build configuration chosen for one invocation.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Options selecting how NEUIK is built.
///
/// A configuration is fixed for the duration of a build invocation; every
/// output list is derived from it without further input besides the
/// dependency environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
  pub platform: Platform,
  /// Unoptimized build with debug symbols.
  pub debug: bool,
  /// Link programs against the static library instead of the shared one.
  pub static_link: bool,
  /// Also produce the static library target. Implied by `static_link`.
  #[serde(default)]
  pub static_library: bool,
  /// Emit `ENABLE_RUNTIME_TYPE_CHECKING`.
  #[serde(default)]
  pub runtime_type_checking: bool,
  /// Dependency libraries linked statically next to the primary library.
  ///
  /// Only meaningful together with `static_link`.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub static_dependencies: Vec<String>,
}

impl BuildConfiguration {
  /// Create a configuration with type checking off and no static overrides.
  pub fn new(platform: Platform, debug: bool, static_link: bool) -> Self {
    Self {
      platform,
      debug,
      static_link,
      static_library: false,
      runtime_type_checking: false,
      static_dependencies: Vec::new(),
    }
  }

  pub fn with_runtime_type_checking(mut self, enabled: bool) -> Self {
    self.runtime_type_checking = enabled;
    self
  }

  pub fn with_static_library(mut self, enabled: bool) -> Self {
    self.static_library = enabled;
    self
  }

  pub fn with_static_dependencies<I, S>(mut self, libs: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.static_dependencies = libs.into_iter().map(Into::into).collect();
    self
  }

  /// Whether a static library target is produced.
  pub fn builds_static_library(&self) -> bool {
    self.static_library || self.static_link
  }

  pub fn profile(&self) -> BuildProfile {
    if self.debug { BuildProfile::Debug } else { BuildProfile::Optimized }
  }
}

/// Optimization profile derived from the debug flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
  Debug,
  Optimized,
}

impl BuildProfile {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::Optimized => "optimized",
    }
  }
}

/// How the runtime type checking define is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCheckingMode {
  On,
  #[default]
  Off,
  /// Per-platform behavior of the historical build scripts.
  Legacy,
}

impl TypeCheckingMode {
  pub fn enabled_for(self, platform: Platform, debug: bool) -> bool {
    match self {
      Self::On => true,
      Self::Off => false,
      Self::Legacy => legacy_runtime_type_checking(platform, debug),
    }
  }
}

/// Whether the historical scripts enabled runtime type checking.
///
/// OSX enabled it for both profiles, Windows only for debug builds, and Linux
/// never did.
pub fn legacy_runtime_type_checking(platform: Platform, debug: bool) -> bool {
  match platform {
    Platform::Linux => false,
    Platform::Osx => true,
    Platform::Windows => debug,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn static_link_implies_static_library() {
    let config = BuildConfiguration::new(Platform::Linux, false, true);
    assert!(config.builds_static_library());

    let config = BuildConfiguration::new(Platform::Linux, false, false);
    assert!(!config.builds_static_library());
    assert!(config.with_static_library(true).builds_static_library());
  }

  #[test]
  fn legacy_type_checking_matches_historical_scripts() {
    assert!(!legacy_runtime_type_checking(Platform::Linux, true));
    assert!(!legacy_runtime_type_checking(Platform::Linux, false));
    assert!(legacy_runtime_type_checking(Platform::Osx, true));
    assert!(legacy_runtime_type_checking(Platform::Osx, false));
    assert!(legacy_runtime_type_checking(Platform::Windows, true));
    assert!(!legacy_runtime_type_checking(Platform::Windows, false));
  }

  #[test]
  fn explicit_modes_ignore_platform() {
    for platform in Platform::ALL {
      assert!(TypeCheckingMode::On.enabled_for(platform, false));
      assert!(!TypeCheckingMode::Off.enabled_for(platform, true));
    }
  }

  #[test]
  fn profile_follows_debug_flag() {
    assert_eq!(
      BuildConfiguration::new(Platform::Osx, true, false).profile(),
      BuildProfile::Debug
    );
    assert_eq!(
      BuildConfiguration::new(Platform::Osx, false, false).profile(),
      BuildProfile::Optimized
    );
  }
}
