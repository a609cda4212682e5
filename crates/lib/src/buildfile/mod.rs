//! Build file (`neuik-build.toml`) handling.
//!
//! The build file pins build options, dependency sets and the programs to
//! build so that a build tool can resolve the same plan on every invocation.
//! Command-line values take precedence over file values.
//!
//! # Format
//!
//! ```toml
//! platform = "linux"
//! debug = true
//! static_link = false
//! runtime_type_checking = "legacy"
//!
//! [dependencies.sdl2]
//! includes = ["/usr/include/SDL2"]
//! libs = ["SDL2"]
//!
//! [[program]]
//! number = "00"
//! name = "helloWorld"
//!
//! [[program]]
//! name = "standalone_label"
//! standalone = true
//! ```

mod template;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{BuildConfiguration, TypeCheckingMode};
use crate::consts::BUILD_FILE_NAME;
use crate::deps::{Dependency, DependencyEnv};
use crate::error::ResolveError;
use crate::platform::Platform;
use crate::targets::ProgramDecl;

pub use template::BUILD_FILE_TEMPLATE;

/// Errors that can occur when working with build files.
#[derive(Debug, Error)]
pub enum BuildFileError {
  #[error("failed to read build file {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse build file {}: {source}", path.display())]
  Parse { path: PathBuf, source: toml::de::Error },

  #[error("file already exists: {}", path.display())]
  PathExists { path: PathBuf },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to write file {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: io::Error },

  #[error("unknown dependency '{0}', expected one of: sdl2, sdl2_ttf, sdl2_image")]
  UnknownDependency(String),

  #[error("dependency '{0}' is configured more than once")]
  DuplicateDependency(String),

  #[error(transparent)]
  Resolve(#[from] ResolveError),
}

/// Overrides for a single dependency set. Absent fields keep the environment value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyOverride {
  pub includes: Option<Vec<String>>,
  pub libs: Option<Vec<String>>,
  pub lib_paths: Option<Vec<String>>,
  pub static_libs: Option<Vec<String>>,
  pub static_lib_paths: Option<Vec<String>>,
}

/// Contents of a build file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildFile {
  pub platform: Option<String>,
  pub debug: Option<bool>,
  pub static_link: Option<bool>,
  pub static_library: Option<bool>,
  pub runtime_type_checking: Option<TypeCheckingMode>,
  pub static_dependencies: Option<Vec<String>>,
  #[serde(default)]
  pub dependencies: BTreeMap<String, DependencyOverride>,
  #[serde(default, rename = "program")]
  pub programs: Vec<ProgramDecl>,
}

/// Values given on the command line, overriding the build file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  pub platform: Option<Platform>,
  pub debug: Option<bool>,
  pub static_link: Option<bool>,
  pub static_library: Option<bool>,
  pub type_checking: Option<TypeCheckingMode>,
  pub static_dependencies: Option<Vec<String>>,
}

/// Inputs of a resolution, after merging build file, overrides and environment.
#[derive(Debug, Clone)]
pub struct BuildSetup {
  pub configuration: BuildConfiguration,
  pub deps: DependencyEnv,
  pub programs: Vec<ProgramDecl>,
}

impl BuildFile {
  /// Parse a build file from TOML text.
  pub fn parse(content: &str, path: &Path) -> Result<Self, BuildFileError> {
    toml::from_str(content).map_err(|source| BuildFileError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Load a build file that must exist.
  pub fn load(path: &Path) -> Result<Self, BuildFileError> {
    let content = fs::read_to_string(path).map_err(|source| BuildFileError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let file = Self::parse(&content, path)?;
    info!(path = %path.display(), programs = file.programs.len(), "loaded build file");
    Ok(file)
  }

  /// Load a build file if it exists.
  ///
  /// Returns `Ok(None)` if the file doesn't exist.
  pub fn load_optional(path: &Path) -> Result<Option<Self>, BuildFileError> {
    match fs::metadata(path) {
      Ok(_) => Self::load(path).map(Some),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(source) => Err(BuildFileError::Read {
        path: path.to_path_buf(),
        source,
      }),
    }
  }

  /// Merge the file with `overrides` and the dependency sets read from `deps`.
  ///
  /// Without a platform from either source the host platform is used.
  pub fn into_setup(self, overrides: Overrides, mut deps: DependencyEnv) -> Result<BuildSetup, BuildFileError> {
    let platform = match (overrides.platform, self.platform.as_deref()) {
      (Some(platform), _) => platform,
      (None, Some(name)) => name.parse::<Platform>()?,
      (None, None) => Platform::host()?,
    };

    let debug = overrides.debug.or(self.debug).unwrap_or(false);
    let static_link = overrides.static_link.or(self.static_link).unwrap_or(false);
    let static_library = overrides.static_library.or(self.static_library).unwrap_or(false);
    let type_checking = overrides
      .type_checking
      .or(self.runtime_type_checking)
      .unwrap_or_default();
    let static_dependencies = overrides
      .static_dependencies
      .or(self.static_dependencies)
      .unwrap_or_default();

    let mut configured: Vec<Dependency> = Vec::new();
    for (name, over) in self.dependencies {
      let dependency = dependency_from_key(&name)?;
      if configured.contains(&dependency) {
        return Err(BuildFileError::DuplicateDependency(name));
      }
      configured.push(dependency);
      apply_override(&mut deps, dependency, over);
    }

    let configuration = BuildConfiguration::new(platform, debug, static_link)
      .with_static_library(static_library)
      .with_runtime_type_checking(type_checking.enabled_for(platform, debug))
      .with_static_dependencies(static_dependencies);

    Ok(BuildSetup {
      configuration,
      deps,
      programs: self.programs,
    })
  }
}

fn dependency_from_key(key: &str) -> Result<Dependency, BuildFileError> {
  match key.to_ascii_lowercase().as_str() {
    "sdl2" => Ok(Dependency::Sdl2),
    "sdl2_ttf" => Ok(Dependency::Sdl2Ttf),
    "sdl2_image" => Ok(Dependency::Sdl2Image),
    _ => Err(BuildFileError::UnknownDependency(key.to_string())),
  }
}

fn apply_override(deps: &mut DependencyEnv, dependency: Dependency, over: DependencyOverride) {
  let set = deps.get_mut(dependency);
  if let Some(includes) = over.includes {
    set.includes = includes;
  }
  if let Some(libs) = over.libs {
    if libs.is_empty() {
      warn!(dependency = dependency.lib_name(), "dependency override has no libraries");
    }
    set.libs = libs;
  }
  if let Some(paths) = over.lib_paths {
    set.lib_paths = paths;
  }
  if let Some(libs) = over.static_libs {
    set.static_libs = libs;
  }
  if let Some(paths) = over.static_lib_paths {
    set.static_lib_paths = paths;
  }
}

/// Default build file path inside `dir`.
pub fn build_file_path(dir: &Path) -> PathBuf {
  dir.join(BUILD_FILE_NAME)
}

/// Write the template build file into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns [`BuildFileError::PathExists`] if a build file is already present.
pub fn write_template(dir: &Path) -> Result<PathBuf, BuildFileError> {
  fs::create_dir_all(dir).map_err(|source| BuildFileError::CreateDir {
    path: dir.to_path_buf(),
    source,
  })?;

  let path = build_file_path(dir);
  if path.exists() {
    return Err(BuildFileError::PathExists { path });
  }

  fs::write(&path, BUILD_FILE_TEMPLATE).map_err(|source| BuildFileError::WriteFile {
    path: path.clone(),
    source,
  })?;

  info!(path = %path.display(), "wrote build file template");
  Ok(path)
}
