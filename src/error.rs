//! Error types for the launcher and the formula tooling.
//!
//! Uses thiserror for derive macros. The `Display` form of every variant is
//! exactly what the binaries print to stderr.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to hand control to the target executable.
///
/// Anything the child does after it starts (nonzero exit, crash) is not a
/// launch error; it is propagated as the launcher's own exit code.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The target name could not be resolved against the search path.
    #[error(
        "Error: `{target}` command not found.\n\
         Please ensure {runtime} is installed and `{target}` is in your PATH.\n\
         You may need to run `pip install {package} --upgrade`."
    )]
    TargetNotFound {
        target: String,
        runtime: String,
        package: String,
    },

    /// Process creation failed for any other reason.
    #[error("Error executing command: {source}")]
    Spawn {
        target: String,
        #[source]
        source: io::Error,
    },

    /// The child started but waiting on it failed.
    #[error("Error executing command: {0}")]
    Wait(#[source] io::Error),
}

impl LaunchError {
    /// Every launch failure exits with the same code.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Errors from loading, checking, and rendering a formula manifest.
#[derive(Error, Debug)]
pub enum FormulaError {
    /// The manifest file could not be read.
    #[error("failed to read manifest '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write '{}': {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// Refusing to clobber an existing file.
    #[error("'{}' already exists (use --force to overwrite)", .path.display())]
    AlreadyExists { path: PathBuf },

    /// The manifest is not valid YAML for the formula model.
    #[error("failed to parse manifest YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The manifest parsed but violates a structural rule.
    #[error("manifest validation failed: {0}")]
    Invalid(String),

    /// Serialization of a manifest or report failed.
    #[error("failed to serialize {what}: {message}")]
    Serialize { what: &'static str, message: String },

    /// `check --strict` found release issues.
    #[error("formula is not release ready: {0} issue(s) found")]
    NotReleaseReady(usize),
}

impl FormulaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FormulaError::NotReleaseReady(_) => exit_codes::VALIDATION_FAILURE,
            _ => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for formula operations.
pub type Result<T> = std::result::Result<T, FormulaError>;
