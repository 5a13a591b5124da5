//! Manifest loading, validation, and naming.

use super::model::Formula;
use crate::error::{FormulaError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9+]*(?:[-_.][a-z0-9][a-z0-9+]*)*(?:@[0-9]+(?:\.[0-9]+)*)?$")
        .expect("valid regex")
});

static SHA256_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{64}$").expect("valid regex"));

impl Formula {
    /// Load a manifest from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the manifest (e.g. `packaging/enhance-this.yaml`)
    ///
    /// # Returns
    ///
    /// * `Ok(Formula)` - Successfully loaded and validated manifest
    /// * `Err(FormulaError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| FormulaError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_yaml(&content).inspect_err(|e| {
            warn!(manifest = %path.display(), error = %e, "rejected formula manifest");
        })
    }

    /// Parse a manifest from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let formula: Formula = serde_yaml::from_str(yaml)?;
        formula.validate()?;
        Ok(formula)
    }

    /// Serialize the manifest to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| FormulaError::Serialize {
            what: "manifest",
            message: e.to_string(),
        })
    }

    /// Validate the manifest structure.
    ///
    /// Validation rules:
    /// - `name` is lowercase `[a-z0-9+]` words joined by single `-`, `_`, or `.`,
    ///   optionally followed by `@<version>` (e.g. `python@3.11`)
    /// - `desc`, `homepage`, `url` are non-empty
    /// - `desc` is a single line without control characters
    /// - every checksum is 64 lowercase hex digits
    /// - resources have unique, non-empty names and non-empty URLs
    /// - the smoke test names a command
    ///
    /// Placeholder checksums pass; they are reported by `release_issues`.
    pub fn validate(&self) -> Result<()> {
        if !NAME_RE.is_match(&self.name) {
            return Err(invalid(format!(
                "name '{}' must be lowercase words joined by single '-', '_' or '.', with an optional '@<version>'",
                self.name
            )));
        }

        for (field, value) in [
            ("desc", &self.desc),
            ("homepage", &self.homepage),
            ("url", &self.url),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} must be non-empty", field)));
            }
        }

        if self.desc.chars().any(char::is_control) {
            return Err(invalid(
                "desc must be a single line without control characters".to_string(),
            ));
        }

        check_sha256("formula", &self.sha256)?;

        let mut seen = HashSet::new();
        for resource in &self.resources {
            if resource.name.trim().is_empty() {
                return Err(invalid("resource names must be non-empty".to_string()));
            }
            if !seen.insert(resource.name.as_str()) {
                return Err(invalid(format!(
                    "resource '{}' is declared more than once",
                    resource.name
                )));
            }
            if resource.url.trim().is_empty() {
                return Err(invalid(format!(
                    "resource '{}' must have a url",
                    resource.name
                )));
            }
            check_sha256(&format!("resource '{}'", resource.name), &resource.sha256)?;
        }

        if self.test.command.trim().is_empty() {
            return Err(invalid("test.command must be non-empty".to_string()));
        }

        Ok(())
    }

    /// Ruby class name Homebrew derives from the formula name.
    ///
    /// `enhance-this` becomes `EnhanceThis`; `python@3.11` becomes `PythonAT311`.
    /// Matches Homebrew's `class_s` for every name `validate` accepts, where each
    /// separator is followed by an alphanumeric and `@` by a digit.
    pub fn class_name(&self) -> String {
        let mut class = String::with_capacity(self.name.len());
        let mut upper_next = true;

        for ch in self.name.chars() {
            match ch {
                '-' | '_' | '.' => upper_next = true,
                '@' => {
                    class.push_str("AT");
                    upper_next = true;
                }
                '+' => class.push('x'),
                c if upper_next => {
                    class.extend(c.to_uppercase());
                    upper_next = false;
                }
                c => class.push(c),
            }
        }

        class
    }
}

fn check_sha256(subject: &str, sha256: &str) -> Result<()> {
    if SHA256_RE.is_match(sha256) {
        Ok(())
    } else {
        Err(invalid(format!(
            "{} sha256 '{}' must be 64 lowercase hex digits",
            subject, sha256
        )))
    }
}

fn invalid(message: String) -> FormulaError {
    FormulaError::Invalid(message)
}
