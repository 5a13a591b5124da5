//! enhance-wrapper: forwards its arguments to the installed `enhance` CLI.
//!
//! Arguments are taken raw from the OS and passed through untouched; the
//! wrapper defines no flags of its own. On success it exits with the child's
//! code, on a launch failure it prints a diagnostic and exits 1.

use enhance_wrapper::config::{LOG_ENV, LauncherConfig};
use enhance_wrapper::{exit_codes, launcher, logging};
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init(logging::filter_from_env(LOG_ENV));

    let config = LauncherConfig::from_env();
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    match launcher::launch(&config, &args) {
        Ok(code) => exit_codes::to_exit_code(code),
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
