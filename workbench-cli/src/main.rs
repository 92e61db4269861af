//! Workbench CLI - Command-line interface for workbench parts layouts
//!
//! Every command reads a serialized layout, applies one operation and
//! prints the resulting serialized layout, so commands compose through
//! shell pipes and variables.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use workbench_core::config::WorkbenchSettings;
use workbench_core::tracing::{TracingLevel, init_tracing};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = util::load_settings(config_path).and_then(|settings| {
        init_logging(&settings, cli.verbose, cli.quiet)?;
        commands::dispatch(&settings, cli.command)
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Installs the subscriber; `-v` raises the configured level, `-q` lowers it to errors.
fn init_logging(settings: &WorkbenchSettings, verbose: u8, quiet: bool) -> Result<(), CliError> {
    let config = settings.logging.to_tracing_config();
    let level = if quiet {
        TracingLevel::Error
    } else {
        config.level.raised_by(verbose)
    };
    init_tracing(&config.with_level(level))?;
    Ok(())
}
