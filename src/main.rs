//! compareoffers CLI - compare two publishing offers
//!
//! Usage: compareoffers [OPTIONS] <OFFER> <OFFER>
//!
//! Prints earnings of both offers at each sales level and the difference
//! between them.

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::Cli;

/// Environment variable holding an explicit log filter
const LOG_ENV: &str = "COMPAREOFFERS_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match commands::compare::cmd_compare(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "compare failed");
            if cli.json {
                emit_error_event(&mut std::io::stdout().lock(), &err);
            }
            eprint!("{}", ui::error::format_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// A failed write is logged; the human-readable error still follows on stderr.
fn emit_error_event(out: &mut impl std::io::Write, err: &anyhow::Error) -> bool {
    let event = serde_json::json!({
        "event": "error",
        "command": "compare",
        "message": err.to_string(),
    });
    match ui::json::write_event(out, &event) {
        Ok(()) => true,
        Err(write_err) => {
            tracing::warn!(error = %write_err, "failed to write error event");
            false
        }
    }
}

/// Logs go to stderr so stdout stays clean for tables and NDJSON.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
