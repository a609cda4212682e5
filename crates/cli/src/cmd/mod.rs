mod info;
mod init;
mod resolve;
mod targets;

pub use info::cmd_info;
pub use init::cmd_init;
pub use resolve::cmd_resolve;
pub use targets::cmd_targets;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use neuik_build_lib::buildfile::{BuildFile, BuildSetup, Overrides, build_file_path};
use neuik_build_lib::{DependencyEnv, Platform, TypeCheckingMode};

/// How `ENABLE_RUNTIME_TYPE_CHECKING` is chosen.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TypeChecking {
  On,
  Off,
  /// Reproduce the historical per-platform choice
  Legacy,
}

impl From<TypeChecking> for TypeCheckingMode {
  fn from(value: TypeChecking) -> Self {
    match value {
      TypeChecking::On => TypeCheckingMode::On,
      TypeChecking::Off => TypeCheckingMode::Off,
      TypeChecking::Legacy => TypeCheckingMode::Legacy,
    }
  }
}

/// Build options shared by the resolving subcommands.
#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
  /// Target platform: linux, osx or windows (default: host platform)
  #[arg(short, long)]
  pub platform: Option<String>,

  /// Unoptimized build with debug symbols
  #[arg(long, conflicts_with = "optimized")]
  pub debug: bool,

  /// Optimized build (the default)
  #[arg(long)]
  pub optimized: bool,

  /// Link programs against the static library
  #[arg(long = "static", conflicts_with = "dynamic")]
  pub static_link: bool,

  /// Link programs against the shared library (the default)
  #[arg(long)]
  pub dynamic: bool,

  /// Also build the static library
  #[arg(long)]
  pub static_library: bool,

  /// Link a dependency library statically (repeatable, requires --static)
  #[arg(long = "static-dep", value_name = "LIB")]
  pub static_deps: Vec<String>,

  /// Runtime type checking define
  #[arg(long, value_enum)]
  pub type_checking: Option<TypeChecking>,

  /// Build file (default: ./neuik-build.toml when present)
  #[arg(short, long)]
  pub config: Option<PathBuf>,
}

impl BuildArgs {
  fn overrides(&self) -> Result<Overrides> {
    let platform = match &self.platform {
      Some(name) => Some(name.parse::<Platform>()?),
      None => None,
    };

    Ok(Overrides {
      platform,
      debug: flag_pair(self.debug, self.optimized),
      static_link: flag_pair(self.static_link, self.dynamic),
      static_library: self.static_library.then_some(true),
      type_checking: self.type_checking.map(Into::into),
      static_dependencies: (!self.static_deps.is_empty()).then(|| self.static_deps.clone()),
    })
  }

  /// Merge build file, command line and environment into the resolver inputs.
  pub fn load_setup(&self) -> Result<BuildSetup> {
    let file = match &self.config {
      Some(path) => BuildFile::load(path)?,
      None => {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        BuildFile::load_optional(&build_file_path(&cwd))?.unwrap_or_default()
      }
    };

    let overrides = self.overrides()?;
    debug!(?overrides, "command line overrides");

    let setup = file
      .into_setup(overrides, DependencyEnv::from_env())
      .context("Invalid build configuration")?;
    Ok(setup)
  }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
  match (on, off) {
    (true, _) => Some(true),
    (_, true) => Some(false),
    _ => None,
  }
}
