//! Exit code constants shared by `enhance-wrapper` and `enhance-formula`.
//!
//! - 0: Success
//! - 1: Failure (launch failure, bad arguments, invalid manifest)
//! - 2: Release-readiness failure under `enhance-formula check --strict`
//!
//! On the launcher's success path the child's own code is used verbatim and
//! these constants do not apply.

use std::process::ExitCode;

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Launch failure, user error, or an unrepresentable child status.
pub const FAILURE: i32 = 1;

/// The formula manifest is valid but not ready to publish.
pub const VALIDATION_FAILURE: i32 = 2;

/// Added to the signal number when a child is killed by a signal (shell convention).
pub const SIGNAL_BASE: i32 = 128;

/// Narrow a raw exit code to the byte a process can report.
///
/// Codes outside `0..=255` cannot be expressed portably and collapse to [`FAILURE`].
pub fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(FAILURE as u8)
}

/// Convert a raw exit code into a process `ExitCode`.
pub fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_byte(code))
}
