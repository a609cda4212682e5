//! The platform build selector.
//!
//! [`resolve`] turns a [`BuildConfiguration`] and the dependency sets of the
//! environment into the lists a build tool needs to compile and link NEUIK:
//!
//! - compiler flags: the base flags plus exactly one of the debug or optimized sets
//! - preprocessor defines: the platform token, plus the runtime type checking
//!   token when requested
//! - sources: the base manifest plus exactly one platform suffix
//! - link recipe: see [`crate::link`]
//!
//! Every call builds fresh lists; nothing is shared between invocations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{BuildConfiguration, BuildProfile};
use crate::consts::{BASE_CFLAGS, DEBUG_CFLAGS, OPTIMIZED_CFLAGS, RUNTIME_TYPE_CHECKING_DEFINE};
use crate::deps::DependencyEnv;
use crate::error::Result;
use crate::link::{LinkRecipe, resolve_link};
use crate::platform::Platform;
use crate::sources::SourceManifest;
use crate::util::hash::Hashable;

/// Everything the build tool needs for one library build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBuild {
  pub configuration: BuildConfiguration,
  pub profile: BuildProfile,
  pub flags: Vec<String>,
  pub defines: Vec<String>,
  pub sources: Vec<String>,
  /// Include paths of the dependencies.
  pub includes: Vec<String>,
  pub link: LinkRecipe,
}

impl Hashable for ResolvedBuild {}

/// Compiler flags for `profile`.
pub fn compiler_flags(profile: BuildProfile) -> Vec<String> {
  let extra = match profile {
    BuildProfile::Debug => DEBUG_CFLAGS,
    BuildProfile::Optimized => OPTIMIZED_CFLAGS,
  };
  BASE_CFLAGS.iter().chain(extra).map(|f| f.to_string()).collect()
}

/// Preprocessor defines for `config`.
pub fn defines(config: &BuildConfiguration) -> Vec<String> {
  let mut defines = vec![config.platform.define().to_string()];
  if config.runtime_type_checking {
    defines.push(RUNTIME_TYPE_CHECKING_DEFINE.to_string());
  }
  defines
}

/// Resolve a build configuration.
///
/// # Errors
///
/// Returns [`crate::error::ResolveError::UnsupportedConfiguration`] when the
/// options have no defined resolution. No partial result is produced.
pub fn resolve(config: &BuildConfiguration, deps: &DependencyEnv) -> Result<ResolvedBuild> {
  let link = resolve_link(config, deps)?;
  let profile = config.profile();

  let resolved = ResolvedBuild {
    configuration: config.clone(),
    profile,
    flags: compiler_flags(profile),
    defines: defines(config),
    sources: SourceManifest::for_platform(config.platform).files,
    includes: deps.includes(),
    link,
  };

  debug!(
    platform = %config.platform,
    profile = profile.as_str(),
    static_link = config.static_link,
    sources = resolved.sources.len(),
    libraries = resolved.link.libraries.len(),
    "resolved build configuration"
  );

  Ok(resolved)
}

/// Resolve from a platform name, the way a build tool passes it on the command line.
pub fn resolve_named(platform: &str, debug: bool, static_link: bool, deps: &DependencyEnv) -> Result<ResolvedBuild> {
  let platform: Platform = platform.parse()?;
  resolve(&BuildConfiguration::new(platform, debug, static_link), deps)
}
