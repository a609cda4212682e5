//! Implementation of the `neuik-build resolve` command.
//!
//! Resolves the build configuration and prints the flags, defines, sources and
//! link recipe for the build tool to consume.

use anyhow::{Context, Result};
use serde::Serialize;

use neuik_build_lib::util::hash::{Hashable, PlanHash};
use neuik_build_lib::{ResolvedBuild, resolve};

use super::BuildArgs;
use crate::output::{OutputFormat, print_json, print_list, print_stat, print_success, truncate_hash};

#[derive(Serialize)]
struct ResolveOutput<'a> {
  hash: PlanHash,
  #[serde(flatten)]
  resolved: &'a ResolvedBuild,
}

pub fn cmd_resolve(args: &BuildArgs, output: OutputFormat) -> Result<()> {
  let setup = args.load_setup()?;
  let resolved = resolve(&setup.configuration, &setup.deps).context("Failed to resolve build")?;
  let hash = resolved.compute_hash().context("Failed to compute plan hash")?;

  if output.is_json() {
    return print_json(&ResolveOutput {
      hash,
      resolved: &resolved,
    });
  }

  let config = &resolved.configuration;
  print_success(&format!(
    "Resolved {} build for {}",
    resolved.profile.as_str(),
    config.platform
  ));
  print_stat("Plan", truncate_hash(&hash.0));
  print_stat("Linking", if config.static_link { "static" } else { "dynamic" });
  print_stat("Sources", &resolved.sources.len().to_string());
  println!();

  print_list("Flags", &resolved.flags);
  print_list("Defines", &resolved.defines);
  print_list("Includes", &resolved.includes);
  print_list("Libraries", &resolved.link.libraries);
  print_list("Library paths", &resolved.link.library_paths);
  print_list("Static libraries", &resolved.link.static_libraries);
  print_list("Static library paths", &resolved.link.static_library_paths);
  print_list("Sources", &resolved.sources);

  Ok(())
}
