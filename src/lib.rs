//! enhance-wrapper: launcher shim and packaging tooling for the `enhance-this`
//! prompt CLI.
//!
//! - [`launcher`] forwards an invocation to the installed `enhance`
//!   executable and relays its exit code (`enhance-wrapper` binary).
//! - [`formula`] models, audits, and renders the Homebrew formula
//!   (`enhance-formula` binary).

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod formula;
pub mod fs;
pub mod launcher;
pub mod logging;

#[cfg(test)]
pub(crate) mod test_support;
