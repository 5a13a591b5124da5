//! Target process launcher.
//!
//! Spawns the target executable with the caller's arguments and inherited
//! standard streams, blocks until it exits, and reports its exit code.
//! Nothing is captured or re-emitted; the child talks to the terminal directly.

use crate::config::LauncherConfig;
use crate::error::LaunchError;
use crate::exit_codes;
use std::ffi::OsString;
use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use tracing::debug;

#[cfg(test)]
mod tests;

/// Run the target with `args` and return the code the launcher should exit with.
///
/// # Arguments
///
/// * `config` - Target name and the hints used in the not-found diagnostic
/// * `args` - Arguments forwarded verbatim, in order
///
/// # Returns
///
/// * `Ok(code)` - The child ran to completion; `code` is its exit status
/// * `Err(LaunchError)` - The child could not be started or waited on
pub fn launch(config: &LauncherConfig, args: &[OsString]) -> Result<i32, LaunchError> {
    debug!(command = %command_line(config, args), "launching target");

    let mut child = spawn(config, args)?;
    debug!(pid = child.id(), "target started");

    let status = child.wait().map_err(LaunchError::Wait)?;
    let code = exit_code(status);
    debug!(%status, code, "target exited");

    Ok(code)
}

/// Spawn the target with all three standard streams inherited.
fn spawn(config: &LauncherConfig, args: &[OsString]) -> Result<Child, LaunchError> {
    Command::new(&config.target)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| classify_spawn_error(config, e))
}

/// Split spawn failures into "not on PATH" and everything else.
fn classify_spawn_error(config: &LauncherConfig, err: io::Error) -> LaunchError {
    if err.kind() == io::ErrorKind::NotFound {
        LaunchError::TargetNotFound {
            target: config.target_display(),
            runtime: config.runtime.clone(),
            package: config.package.clone(),
        }
    } else {
        LaunchError::Spawn {
            target: config.target_display(),
            source: err,
        }
    }
}

/// Map a child's termination status to the launcher's exit code.
///
/// A normal exit propagates its code unchanged. On Unix a signal death
/// becomes `128 + signal`; anything else is reported as a failure.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return exit_codes::SIGNAL_BASE + signal;
        }
    }

    exit_codes::FAILURE
}

/// Shell-quoted rendering of the command, for log events only.
fn command_line(config: &LauncherConfig, args: &[OsString]) -> String {
    let words: Vec<String> = std::iter::once(&config.target)
        .chain(args)
        .map(|word| word.to_string_lossy().into_owned())
        .collect();
    shell_words::join(words)
}
