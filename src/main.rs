mod commands;
mod core;
mod registry;
mod release;
mod ui;

use clap::{Parser, Subcommand};
use crate::core::context::DistContext;
use crate::core::error::{UpdateError, UpdateResult, print_error};
use crate::ui::{Confirm, TerminalPrompt};
use std::path::PathBuf;

/// Select per-channel versions from a distribution directory and publish channel indexes
#[derive(Parser)]
#[command(name = "updatemgr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Distribution directory (default: [storage] root from updatemgr.toml, then the current directory)
  #[arg(long, global = true, value_name = "PATH")]
  dir: Option<PathBuf>,

  /// Show debug logging (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Select the newest stable version of every component and write stable.json
  Release,

  /// Stage a pre-release channel index, or remove its staged files with --reset
  Prerelease {
    /// Pre-release channel name, e.g. beta
    channel: String,
    /// Delete the files of the channel's currently selected versions instead of publishing
    #[arg(long)]
    reset: bool,
  },

  /// List every component and its versions, newest first
  Scan {
    /// Output the registry export in JSON format
    #[arg(long)]
    json: bool,
  },
}

fn get_styles() -> clap::builder::Styles {
  use anstyle::{AnsiColor, Color, Style};

  let heading = Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
  clap::builder::Styles::styled()
    .header(heading)
    .usage(heading)
    .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
    .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

fn init_logging(verbose: bool) {
  let default_filter = if verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
    .format_timestamp(None)
    .init();
}

/// Dispatch a parsed command line
fn run(cli: Cli, gate: &mut dyn Confirm) -> UpdateResult<()> {
  let cwd = std::env::current_dir().map_err(|e| {
    UpdateError::with_help(
      format!("Failed to get current directory: {}", e),
      "Run updatemgr from an existing directory.",
    )
  })?;
  let ctx = DistContext::build(&cwd, cli.dir)?;

  match cli.command {
    Commands::Release => commands::run_release(&ctx, gate),
    Commands::Prerelease { channel, reset } => commands::run_prerelease(&ctx, channel, reset, gate),
    Commands::Scan { json } => commands::run_scan(&ctx, json),
  }
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let mut gate = TerminalPrompt::stdio();
  if let Err(err) = run(cli, &mut gate) {
    handle_error(err);
  }
}

fn handle_error(err: UpdateError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
