//! exprlint CLI tool.
//!
//! Usage:
//! ```bash
//! exprlint check [OPTIONS] [FILE]
//! exprlint fmt [OPTIONS] [FILE]
//! exprlint list-rules
//! exprlint init
//! ```
//!
//! `FILE` defaults to `-`, which reads the expression from stdin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter and formatter for host-scripting expressions
#[derive(Parser)]
#[command(name = "exprlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint an expression
    Check {
        /// Expression file to lint, or `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated ids)
        #[arg(long)]
        rules: Option<String>,
    },

    /// Reformat an expression
    Fmt {
        /// Expression file to format, or `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Rewrite the file in place instead of printing to stdout
        #[arg(short, long)]
        write: bool,

        /// Exit non-zero if the file is not already formatted, without writing
        #[arg(long, conflicts_with = "write")]
        check: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Rich annotated-source output.
    Pretty,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            file,
            format,
            rules,
        } => {
            let source = config_resolver::resolve_for(&file, cli.config.as_deref());
            commands::check::run(&file, format, rules, &source)
        }
        Commands::Fmt { file, write, check } => {
            let source = config_resolver::resolve_for(&file, cli.config.as_deref());
            commands::fmt::run(&file, write, check, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
