//! Library and program targets derived from a resolved build.

use serde::{Deserialize, Serialize};

use crate::consts::{LIB_DIR, LIB_NAME, PROGRAM_BIN_DIR, PROGRAM_INCLUDE_DIR, PROGRAM_SRC_DIR};
use crate::deps::{Dependency, DependencyEnv, merge_unique};
use crate::error::{ResolveError, Result};
use crate::link::LinkRecipe;
use crate::resolve::ResolvedBuild;

/// Kind of artifact a target produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
  SharedLibrary,
  StaticLibrary,
  Program,
}

impl TargetKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::SharedLibrary => "shlib",
      Self::StaticLibrary => "stlib",
      Self::Program => "program",
    }
  }
}

/// One artifact for the build tool to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
  pub kind: TargetKind,
  /// Output path without platform-specific prefix or extension.
  pub output: String,
  pub sources: Vec<String>,
  pub flags: Vec<String>,
  pub defines: Vec<String>,
  pub includes: Vec<String>,
  pub link: LinkRecipe,
}

/// A program declared by the build file, e.g. `00-helloWorld`.
///
/// Standalone programs (`standalone = true`) carry no number, live in
/// `examples/src/<name>/main.c` and link SDL2 and SDL2_ttf directly instead
/// of the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramDecl {
  /// Two-digit ordering number. Empty for standalone programs.
  #[serde(default)]
  pub number: String,
  pub name: String,
  /// Libraries linked on top of the resolved recipe.
  #[serde(default)]
  pub extra_libraries: Vec<String>,
  /// Also search the SDL2 include paths.
  #[serde(default)]
  pub sdl_includes: bool,
  #[serde(default)]
  pub standalone: bool,
}

impl ProgramDecl {
  pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
    Self {
      number: number.into(),
      name: name.into(),
      extra_libraries: Vec::new(),
      sdl_includes: false,
      standalone: false,
    }
  }

  pub fn standalone(name: impl Into<String>) -> Self {
    Self {
      standalone: true,
      ..Self::new("", name)
    }
  }

  /// The `<number>-<name>` stem used for source directory and output.
  pub fn stem(&self) -> String {
    if self.standalone {
      self.name.clone()
    } else {
      format!("{}-{}", self.number, self.name)
    }
  }

  fn validate(&self) -> Result<()> {
    if self.standalone {
      if !self.number.is_empty() {
        return Err(ResolveError::configuration(format!(
          "standalone program '{}' cannot have a number",
          self.name
        )));
      }
    } else if self.number.len() != 2 || !self.number.chars().all(|c| c.is_ascii_digit()) {
      return Err(ResolveError::configuration(format!(
        "program number '{}' must be two digits",
        self.number
      )));
    }
    let valid_name = !self.name.is_empty() && self.name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_name {
      return Err(ResolveError::configuration(format!(
        "program name '{}' must be a non-empty ASCII identifier",
        self.name
      )));
    }
    Ok(())
  }
}

/// Targets for the library itself: the shared library, and the static one when requested.
///
/// The library links its dependencies by name against their dynamic search paths,
/// whatever link mode programs use.
pub fn library_targets(resolved: &ResolvedBuild, deps: &DependencyEnv) -> Vec<Target> {
  let output = format!("{}/{}", LIB_DIR, LIB_NAME);
  let link = LinkRecipe {
    libraries: Dependency::ALL.iter().map(|d| d.lib_name().to_string()).collect(),
    library_paths: merge_unique(deps.iter().map(|s| s.lib_paths.as_slice()), &[]),
    ..LinkRecipe::default()
  };

  let mut kinds = vec![TargetKind::SharedLibrary];
  if resolved.configuration.builds_static_library() {
    kinds.insert(0, TargetKind::StaticLibrary);
  }

  kinds
    .into_iter()
    .map(|kind| Target {
      kind,
      output: output.clone(),
      sources: resolved.sources.clone(),
      flags: resolved.flags.clone(),
      defines: resolved.defines.clone(),
      includes: resolved.includes.clone(),
      link: link.clone(),
    })
    .collect()
}

/// Target for one declared program.
///
/// Programs requesting extra libraries also search the SDL2 dynamic library paths.
pub fn program_target(resolved: &ResolvedBuild, deps: &DependencyEnv, program: &ProgramDecl) -> Result<Target> {
  program.validate()?;

  if program.standalone {
    return Ok(standalone_target(resolved, deps, program));
  }

  let stem = program.stem();
  let sdl = deps.get(Dependency::Sdl2);
  let mut includes = vec![PROGRAM_INCLUDE_DIR.to_string()];
  if program.sdl_includes {
    includes = merge_unique([includes.as_slice(), sdl.includes.as_slice()], &[]);
  }

  let mut link = resolved.link.clone().with_extra_libraries(&program.extra_libraries);
  if !program.extra_libraries.is_empty() {
    link.library_paths = merge_unique([link.library_paths.as_slice(), sdl.lib_paths.as_slice()], &[]);
  }

  Ok(Target {
    kind: TargetKind::Program,
    output: format!("{}/{}", PROGRAM_BIN_DIR, stem),
    sources: vec![format!("{}/{}/main-{}.c", PROGRAM_SRC_DIR, stem, program.name)],
    flags: resolved.flags.clone(),
    defines: resolved.defines.clone(),
    includes,
    link,
  })
}

/// A program built straight on SDL2 and SDL2_ttf, without the library.
fn standalone_target(resolved: &ResolvedBuild, deps: &DependencyEnv, program: &ProgramDecl) -> Target {
  let sets = [deps.get(Dependency::Sdl2), deps.get(Dependency::Sdl2Ttf)];
  let libraries = merge_unique(
    sets
      .iter()
      .map(|s| s.libs.as_slice())
      .chain(std::iter::once(program.extra_libraries.as_slice())),
    &[],
  );

  Target {
    kind: TargetKind::Program,
    output: format!("{}/{}", PROGRAM_BIN_DIR, program.name),
    sources: vec![format!("{}/{}/main.c", PROGRAM_SRC_DIR, program.name)],
    flags: resolved.flags.clone(),
    defines: vec![resolved.configuration.platform.define().to_string()],
    includes: merge_unique(sets.iter().map(|s| s.includes.as_slice()), &[]),
    link: LinkRecipe {
      libraries,
      library_paths: merge_unique(sets.iter().map(|s| s.lib_paths.as_slice()), &[]),
      ..LinkRecipe::default()
    },
  }
}

/// Targets for every declared program, in declaration order.
pub fn program_targets(resolved: &ResolvedBuild, deps: &DependencyEnv, programs: &[ProgramDecl]) -> Result<Vec<Target>> {
  let mut seen: Vec<String> = Vec::new();
  let mut targets = Vec::with_capacity(programs.len());

  for program in programs {
    let stem = program.stem();
    if seen.contains(&stem) {
      return Err(ResolveError::configuration(format!("program '{}' declared twice", stem)));
    }
    targets.push(program_target(resolved, deps, program)?);
    seen.push(stem);
  }

  Ok(targets)
}
