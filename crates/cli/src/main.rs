use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::TargetArgs;
use output::{OutputFormat, print_error};

/// brush - Package declarative color themes as editor extensions
#[derive(Parser)]
#[command(name = "brush")]
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
  /// Package a theme config into a .vsix in the root directory
  Build {
    #[command(flatten)]
    target: TargetArgs,
  },

  /// Build the theme, then install it into the editor (replacing any installed copy)
  Install {
    #[command(flatten)]
    target: TargetArgs,

    /// Install an already packaged .vsix instead of building first (needs `version` in the config)
    #[arg(long)]
    no_build: bool,
  },

  /// Remove the theme from the editor. Succeeds even if it was never installed
  Uninstall {
    #[command(flatten)]
    target: TargetArgs,
  },

  /// Show what a build would write, without touching the disk
  Plan {
    #[command(flatten)]
    target: TargetArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: OutputFormat,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Build { target } => cmd::cmd_build(&target),
    Commands::Install { target, no_build } => cmd::cmd_install(&target, no_build),
    Commands::Uninstall { target } => cmd::cmd_uninstall(&target),
    Commands::Plan { target, format } => cmd::cmd_plan(&target, format),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

/// `RUST_LOG` wins; otherwise warnings only, or everything down to debug with `--verbose`.
fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
