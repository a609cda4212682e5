//! neuik-build-lib: build plan resolution for the NEUIK widget toolkit
//!
//! This crate turns a target platform and a handful of build options into the
//! lists a build tool needs to compile NEUIK and link programs against it:
//! - `BuildConfiguration`: the options chosen for one build invocation
//! - `SourceManifest`: the platform-invariant sources plus one platform suffix
//! - `LinkRecipe`: libraries and search paths for static or dynamic linking
//! - `ResolvedBuild`: the complete, hashable result of [`resolve::resolve`]
//! - `Target`: library and program artifacts derived from a resolved build

pub mod buildfile;
pub mod config;
pub mod consts;
pub mod deps;
pub mod error;
pub mod link;
pub mod platform;
pub mod resolve;
pub mod sources;
pub mod targets;
pub mod util;

pub use config::{BuildConfiguration, BuildProfile, TypeCheckingMode};
pub use deps::{Dependency, DependencyEnv, DependencySet};
pub use error::ResolveError;
pub use link::LinkRecipe;
pub use platform::Platform;
pub use resolve::{ResolvedBuild, resolve};
pub use sources::SourceManifest;
