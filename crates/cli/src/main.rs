mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::BuildArgs;
use crate::output::{OutputFormat, print_error};

/// neuik-build - resolve NEUIK build plans for Linux, OSX and Windows
#[derive(Parser)]
#[command(name = "neuik-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve compiler flags, defines, sources and link recipe
  Resolve {
    #[command(flatten)]
    build: BuildArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// List the library and program targets of the build
  Targets {
    #[command(flatten)]
    build: BuildArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    output: OutputFormat,
  },

  /// Show the detected host platform and dependency environment
  Info,

  /// Write a template build file
  Init {
    /// Directory to write neuik-build.toml into
    #[arg(default_value = ".")]
    path: PathBuf,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Resolve { build, output } => cmd::cmd_resolve(&build, output),
    Commands::Targets { build, output } => cmd::cmd_targets(&build, output),
    Commands::Info => cmd::cmd_info(),
    Commands::Init { path } => cmd::cmd_init(&path),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
