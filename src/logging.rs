//! Tracing setup.
//!
//! Both binaries log to stderr through a `tracing-subscriber` fmt layer. The
//! subscriber is only installed when a filter is supplied, which keeps the
//! launcher's stderr free of anything but the child's output by default.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Read a filter directive from `var`, if it is set, non-empty, and parses.
pub fn filter_from_env(var: &str) -> Option<EnvFilter> {
    parse_directive(&std::env::var(var).ok()?)
}

fn parse_directive(directive: &str) -> Option<EnvFilter> {
    if directive.trim().is_empty() {
        return None;
    }
    EnvFilter::try_new(directive).ok()
}

/// Install a global stderr subscriber with `filter`.
///
/// Returns `false` when no filter was given or a subscriber is already set.
pub fn init(filter: Option<EnvFilter>) -> bool {
    let Some(filter) = filter else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .is_ok()
}
