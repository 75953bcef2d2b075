use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{CatalogCommand, CatalogDispatch, StandaloneCommand, StandaloneDispatch};
use showroom_catalog::CatalogStoreError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                eprintln!("{error_json:#}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` shows debug events and
/// `--quiet` only errors.
fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "showroom=debug,showroom_catalog=debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, &config);

    if let Some(dispatch) = StandaloneDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    match CatalogDispatch::from_cli(cli) {
        Some(dispatch) => {
            let catalog = commands::load_catalog(cli, &config)?;
            dispatch.execute(&ctx, &catalog, &config)
        }
        None => Ok(()),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::CatalogStore(_) => "CATALOG_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::NotFound { .. } => "NOT_FOUND",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Config(_) => 5,
        CommandError::CatalogStore(CatalogStoreError::ReadError { .. }) => 3,
        CommandError::CatalogStore(_) => 4,
        CommandError::NotFound { .. } => 2,
        CommandError::Io(_) => 3,
        CommandError::Json(_) => 1,
    }
}
