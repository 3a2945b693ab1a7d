//! asht CLI - command-line driver for the ash lexical scanner.
//!
//! Parses arguments with clap, initializes logging, loads configuration
//! and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::Command;
use commands::{CheckArgs, CheckCommand, TokensArgs, TokensCommand};
use config::Config;
use error::{AshtError, Result};

/// asht - inspect and check ash source files
#[derive(Parser, Debug)]
#[command(name = "asht")]
#[command(author = "Ash Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and check ash source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ASHT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ASHT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ASHT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the asht CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Reads FILE (or standard input for `-`) and prints one token per
    /// line, or a JSON array with `--format json`.
    Tokens(TokensCommandArgs),

    /// Scan source files and report lexical errors
    ///
    /// Scans every FILE in parallel and prints `path:line:offset: message`
    /// for each file that fails. Exits non-zero if any file fails.
    Check(CheckCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Source file, or `-` for standard input
    file: PathBuf,

    /// Output format (table, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Show character offsets next to line numbers
    #[arg(short, long)]
    offsets: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| AshtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, config),
        Commands::Check(args) => execute_check(args, verbose, config),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommandArgs, verbose: bool, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        verbose,
        file: args.file,
        format: args.format,
        offsets: args.offsets,
    };
    TokensCommand::new(tokens_args)
        .with_config(config.tokens)
        .execute()?;
    Ok(())
}

/// Execute the check command.
fn execute_check(args: CheckCommandArgs, verbose: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        verbose,
        files: args.files,
        jobs: args.jobs,
    };
    CheckCommand::new(check_args)
        .with_config(config.check)
        .execute()?;
    Ok(())
}
