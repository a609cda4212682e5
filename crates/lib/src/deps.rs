//! Third-party dependency sets provided by the build environment.
//!
//! NEUIK depends on SDL2, SDL2_ttf and SDL2_image. For each of them the build
//! tool hands over include paths, library names and library search paths for
//! both dynamic and static linking, using the variables
//!
//! - `INCLUDES_<DEP>`, `LIBPATH_<DEP>`, `STLIBPATH_<DEP>`: path lists separated
//!   by the platform path separator
//! - `LIB_<DEP>`, `STLIB_<DEP>`: whitespace-separated library names
//!
//! where `<DEP>` is `SDL2`, `SDL2_TTF` or `SDL2_IMAGE`.

use std::ffi::OsString;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the libraries NEUIK is built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dependency {
  Sdl2,
  Sdl2Ttf,
  Sdl2Image,
}

impl Dependency {
  /// All dependencies, in link order.
  pub const ALL: [Dependency; 3] = [Dependency::Sdl2, Dependency::Sdl2Ttf, Dependency::Sdl2Image];

  /// Library name passed to the linker.
  pub fn lib_name(&self) -> &'static str {
    match self {
      Self::Sdl2 => "SDL2",
      Self::Sdl2Ttf => "SDL2_ttf",
      Self::Sdl2Image => "SDL2_image",
    }
  }

  fn index(&self) -> usize {
    *self as usize
  }

  /// Suffix of the environment variables describing this dependency.
  pub fn env_key(&self) -> &'static str {
    match self {
      Self::Sdl2 => "SDL2",
      Self::Sdl2Ttf => "SDL2_TTF",
      Self::Sdl2Image => "SDL2_IMAGE",
    }
  }
}

/// Include and link information for one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySet {
  pub dependency: Dependency,
  pub includes: Vec<String>,
  /// Libraries to link when linking dynamically.
  pub libs: Vec<String>,
  pub lib_paths: Vec<String>,
  /// Libraries to link when linking statically.
  pub static_libs: Vec<String>,
  pub static_lib_paths: Vec<String>,
}

impl DependencySet {
  /// A set that links the dependency by its own name with no extra paths.
  pub fn bare(dependency: Dependency) -> Self {
    Self {
      dependency,
      includes: Vec::new(),
      libs: vec![dependency.lib_name().to_string()],
      lib_paths: Vec::new(),
      static_libs: vec![dependency.lib_name().to_string()],
      static_lib_paths: Vec::new(),
    }
  }

  /// Read the set from variables returned by `lookup`.
  fn from_lookup<F>(dependency: Dependency, lookup: &F) -> Self
  where
    F: Fn(&str) -> Option<OsString>,
  {
    let key = dependency.env_key();
    let mut set = Self::bare(dependency);

    if let Some(value) = lookup(&format!("INCLUDES_{}", key)) {
      set.includes = split_path_list(&value);
    }
    if let Some(value) = lookup(&format!("LIB_{}", key)) {
      set.libs = split_names(&value);
    }
    if let Some(value) = lookup(&format!("LIBPATH_{}", key)) {
      set.lib_paths = split_path_list(&value);
    }
    if let Some(value) = lookup(&format!("STLIB_{}", key)) {
      set.static_libs = split_names(&value);
    }
    if let Some(value) = lookup(&format!("STLIBPATH_{}", key)) {
      set.static_lib_paths = split_path_list(&value);
    }

    set
  }
}

/// Dependency sets for every dependency, in link order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEnv {
  sets: [DependencySet; 3],
}

impl Default for DependencyEnv {
  fn default() -> Self {
    Self {
      sets: Dependency::ALL.map(DependencySet::bare),
    }
  }
}

impl DependencyEnv {
  /// Read the dependency sets from the process environment.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var_os(key))
  }

  /// Read the dependency sets through an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<OsString>,
  {
    let sets = Dependency::ALL.map(|d| DependencySet::from_lookup(d, &lookup));
    debug!(count = sets.len(), "loaded dependency sets");
    Self { sets }
  }

  pub fn get(&self, dependency: Dependency) -> &DependencySet {
    &self.sets[dependency.index()]
  }

  pub fn get_mut(&mut self, dependency: Dependency) -> &mut DependencySet {
    &mut self.sets[dependency.index()]
  }

  pub fn iter(&self) -> impl Iterator<Item = &DependencySet> {
    self.sets.iter()
  }

  /// Include paths of every dependency, first occurrence wins.
  pub fn includes(&self) -> Vec<String> {
    merge_unique(self.sets.iter().map(|s| s.includes.as_slice()), &[])
  }
}

/// Concatenate `lists` in order, skipping entries already seen or listed in `exclude`.
pub fn merge_unique<'a, I>(lists: I, exclude: &[String]) -> Vec<String>
where
  I: IntoIterator<Item = &'a [String]>,
{
  let mut merged: Vec<String> = Vec::new();
  for list in lists {
    for entry in list {
      if !exclude.contains(entry) && !merged.contains(entry) {
        merged.push(entry.clone());
      }
    }
  }
  merged
}

fn split_names(value: &OsString) -> Vec<String> {
  value.to_string_lossy().split_whitespace().map(str::to_string).collect()
}

fn split_path_list(value: &OsString) -> Vec<String> {
  std::env::split_paths(value)
    .map(|p| p.to_string_lossy().into_owned())
    .filter(|p| !p.is_empty())
    .collect()
}
