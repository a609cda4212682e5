//! Implementation of the `neuik-build targets` command.

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};

use neuik_build_lib::resolve;
use neuik_build_lib::targets::{Target, library_targets, program_targets};

use super::BuildArgs;
use crate::output::{OutputFormat, print_info, print_json, symbols};

pub fn cmd_targets(args: &BuildArgs, output: OutputFormat) -> Result<()> {
  let setup = args.load_setup()?;
  let resolved = resolve(&setup.configuration, &setup.deps).context("Failed to resolve build")?;

  let mut targets = library_targets(&resolved, &setup.deps);
  targets.extend(program_targets(&resolved, &setup.deps, &setup.programs).context("Invalid program declaration")?);

  if output.is_json() {
    return print_json(&targets);
  }

  for target in &targets {
    print_target(target);
  }

  if setup.programs.is_empty() {
    println!();
    print_info("No programs declared. Add [[program]] entries to neuik-build.toml.");
  }

  Ok(())
}

fn print_target(target: &Target) {
  println!(
    "  {} {:<7} {}",
    symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.cyan()),
    target.kind.as_str(),
    target.output
  );
  println!(
    "      {}",
    format!(
      "{} source(s), {} librar(ies)",
      target.sources.len(),
      target.link.libraries.len() + target.link.static_libraries.len()
    )
    .if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
}
