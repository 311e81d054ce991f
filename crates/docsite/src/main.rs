//! docsite CLI - site descriptor tooling.
//!
//! Provides commands for:
//! - `check`: Validate (and merge) site descriptor files
//! - `export`: Write the configuration consumed by the site generator

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs};
use output::Output;

/// docsite - documentation site descriptor tooling.
#[derive(Parser)]
#[command(name = "docsite", version, about)]
struct Cli {
    /// Enable verbose output (log load and merge steps).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate site descriptor files.
    Check(CheckArgs),
    /// Print or write the generator configuration.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    let filter = log_filter(cli.verbose, EnvFilter::try_from_default_env().ok());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Export(args) => args.execute(&output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output.error(&format!("Error: {err}"));
            ExitCode::FAILURE
        }
    }
}

/// --verbose enables INFO level, otherwise use RUST_LOG or default to WARN.
fn log_filter(verbose: bool, from_env: Option<EnvFilter>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    from_env.unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_verbose_is_info() {
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_prefers_env_setting() {
        let from_env = EnvFilter::new("debug");
        assert_eq!(
            log_filter(false, Some(from_env)).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
