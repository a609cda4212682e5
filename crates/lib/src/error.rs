//! Error types for build resolution.

use thiserror::Error;

/// Errors surfaced while resolving a build configuration.
///
/// Resolution is a pure computation, so every variant describes input that has
/// no defined resolution. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
  /// The platform name does not match a supported platform.
  #[error("unsupported platform '{0}', expected one of: linux, osx, windows")]
  UnsupportedPlatform(String),

  /// The host running the resolver is not a supported build platform.
  #[error("host platform '{0}' is not supported, pass a platform explicitly")]
  UnsupportedHost(String),

  /// The combination of options has no defined resolution.
  #[error("unsupported configuration: {reason}")]
  UnsupportedConfiguration { reason: String },
}

impl ResolveError {
  pub(crate) fn configuration(reason: impl Into<String>) -> Self {
    Self::UnsupportedConfiguration { reason: reason.into() }
  }

  /// Whether this error belongs to the unsupported-configuration class.
  pub fn is_unsupported_configuration(&self) -> bool {
    matches!(
      self,
      Self::UnsupportedPlatform(_) | Self::UnsupportedHost(_) | Self::UnsupportedConfiguration { .. }
    )
  }
}

pub type Result<T, E = ResolveError> = std::result::Result<T, E>;
