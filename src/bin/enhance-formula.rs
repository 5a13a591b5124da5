//! enhance-formula: maintain the Homebrew formula for enhance-this.
//!
//! Parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

use enhance_wrapper::cli::Cli;
use enhance_wrapper::{commands, exit_codes, logging};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Tracing filter directive for enhance-formula.
const LOG_ENV: &str = "ENHANCE_FORMULA_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let filter = if cli.verbose {
        Some(EnvFilter::new("debug"))
    } else {
        logging::filter_from_env(LOG_ENV)
    };
    logging::init(filter);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
