//! Implementation of the `neuik-build init` command.
//!
//! Writes a template `neuik-build.toml` that pins build options and declares
//! example programs.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use neuik_build_lib::buildfile::write_template;

use crate::output::symbols;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if a build file already exists in `path` or it cannot be written.
pub fn cmd_init(path: &Path) -> Result<()> {
  let file = write_template(path).context("Failed to initialize build file")?;

  println!(
    "{} {}",
    symbols::SUCCESS.green(),
    "Initialized NEUIK build file!".green().bold()
  );
  println!();
  println!("  {} Build file: {}", symbols::INFO.cyan(), file.display());
  println!();
  println!("{}", "Next steps:".bold());
  println!("  1. Edit {} to pick options and programs", file.display().to_string().cyan());
  println!("  2. Run: {}", "neuik-build resolve".cyan());

  Ok(())
}
