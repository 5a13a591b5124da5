//! Command implementations for enhance-formula.
//!
//! `dispatch` routes each subcommand to its handler. Handlers print their
//! results to stdout; errors bubble up to `main` for reporting.

use crate::cli::{CheckArgs, Command, InitArgs, RenderArgs};
use crate::error::{FormulaError, Result};
use crate::formula::{Formula, ReleaseReport};
use crate::fs::atomic_write_file;
use std::path::Path;
use tracing::debug;


const MANIFEST_HEADER: &str = "# Homebrew formula manifest. Render with `enhance-formula render`.\n";

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init(args) => cmd_init(args),
        Command::Check(args) => cmd_check(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_init(args: InitArgs) -> Result<()> {
    write_default_manifest(&args.output, args.force)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> Result<()> {
    let report = Formula::load(&args.manifest)?.release_report();
    debug!(
        manifest = %args.manifest.display(),
        issues = report.issues.len(),
        "audited manifest"
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).map_err(|e| FormulaError::Serialize {
                what: "report",
                message: e.to_string(),
            })?;
        println!("{}", json);
    } else {
        print!("{}", format_report(&report));
    }

    if args.strict && !report.release_ready {
        return Err(FormulaError::NotReleaseReady(report.issues.len()));
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let source = Formula::load(&args.manifest)?.render();

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &source)?;
            debug!(output = %path.display(), bytes = source.len(), "rendered formula");
            println!("Rendered {} to {}", args.manifest.display(), path.display());
        }
        None => print!("{}", source),
    }
    Ok(())
}

/// Write the built-in enhance-this manifest to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub(crate) fn write_default_manifest(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(FormulaError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let yaml = Formula::enhance_this().to_yaml()?;
    atomic_write_file(path, &format!("{}{}", MANIFEST_HEADER, yaml))
}

/// Human-readable rendering of a release report.
pub(crate) fn format_report(report: &ReleaseReport) -> String {
    if report.release_ready {
        return format!("ok: {} is release ready\n", report.formula);
    }

    let mut out = format!(
        "{}: {} release issue(s)\n",
        report.formula,
        report.issues.len()
    );
    for issue in &report.issues {
        out.push_str(&format!("  - {}\n", issue));
    }
    out
}
