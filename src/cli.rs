//! Command-line interface for w96box.
//!
//! The launcher is a windowed application with no real CLI surface; the
//! flags here only tune where state lives and how loudly we log.

use clap::Parser;
use std::path::PathBuf;

/// w96box - launcher for isolated Windows 96 browser profiles
#[derive(Parser)]
#[command(name = "w96box")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the application-data root (registry, settings, profile storage)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Runtime options passed from CLI to the application.
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Application-data root override.
    pub data_dir: Option<PathBuf>,
    /// Log level from `--log-level` (highest precedence, over `RUST_LOG`).
    pub log_level: Option<log::LevelFilter>,
}

/// Process CLI arguments. `--help`/`--version` exit inside clap.
pub fn process_cli() -> RuntimeOptions {
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().map(|raw| {
        raw.parse::<log::LevelFilter>().unwrap_or_else(|_| {
            eprintln!("w96box: unknown log level '{raw}', using 'info'");
            log::LevelFilter::Info
        })
    });

    RuntimeOptions {
        data_dir: cli.data_dir,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
