//! CLI argument parsing for `enhance-formula`.
//!
//! Uses clap derive macros for declarative argument definitions. The
//! launcher binary has no parser at all: every argument belongs to the
//! target executable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default location of the formula manifest.
pub const DEFAULT_MANIFEST: &str = "packaging/enhance-this.yaml";

/// enhance-formula: maintain the Homebrew formula for enhance-this.
///
/// The formula is kept as a YAML manifest and rendered to Ruby.
#[derive(Parser, Debug)]
#[command(name = "enhance-formula")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr (overrides ENHANCE_FORMULA_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for enhance-formula.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the built-in enhance-this manifest.
    Init(InitArgs),

    /// Validate a manifest and audit it for release readiness.
    ///
    /// Placeholder checksums, provisional URLs, and plain-http sources are
    /// reported as issues. Use `--strict` to fail when any are found.
    Check(CheckArgs),

    /// Render a manifest to a Homebrew formula.
    Render(RenderArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the manifest.
    #[arg(short, long, default_value = DEFAULT_MANIFEST)]
    pub output: PathBuf,

    /// Overwrite an existing manifest.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Manifest to check.
    #[arg(default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Treat release issues as failures (exit code 2).
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Manifest to render.
    #[arg(default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Write the formula here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
