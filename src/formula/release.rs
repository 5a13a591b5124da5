//! Release-readiness audit.
//!
//! A manifest can be structurally valid and still not describe a publishable
//! release: the first draft of a formula usually points at a provisional
//! archive with a zeroed checksum. These findings are reported, not rejected.

use super::model::{Formula, PLACEHOLDER_SHA256};
use serde::Serialize;
use std::fmt;

/// What is wrong with one part of the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    PlaceholderChecksum,
    ProvisionalUrl,
    InsecureUrl,
    DescriptionPunctuation,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IssueKind::PlaceholderChecksum => "sha256 is a placeholder (all zeros)",
            IssueKind::ProvisionalUrl => "source url is marked provisional",
            IssueKind::InsecureUrl => "url does not use https",
            IssueKind::DescriptionPunctuation => "desc should not end with a period",
        };
        f.write_str(text)
    }
}

/// A single audit finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseIssue {
    /// `formula` or `resource <name>`.
    pub subject: String,
    pub kind: IssueKind,
}

impl fmt::Display for ReleaseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.kind)
    }
}

/// Machine-readable result of `enhance-formula check`.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseReport {
    pub formula: String,
    pub release_ready: bool,
    pub issues: Vec<ReleaseIssue>,
}

impl Formula {
    /// Audit the formula for anything that blocks publishing it.
    ///
    /// Formula-level findings come first, then resources in manifest order.
    pub fn release_issues(&self) -> Vec<ReleaseIssue> {
        let mut issues = Vec::new();
        let mut report = |subject: &str, kind: IssueKind| {
            issues.push(ReleaseIssue {
                subject: subject.to_string(),
                kind,
            })
        };

        if self.provisional {
            report("formula", IssueKind::ProvisionalUrl);
        }
        if self.sha256 == PLACEHOLDER_SHA256 {
            report("formula", IssueKind::PlaceholderChecksum);
        }
        if !is_https(&self.url) || !is_https(&self.homepage) {
            report("formula", IssueKind::InsecureUrl);
        }
        if self.desc.trim_end().ends_with('.') {
            report("formula", IssueKind::DescriptionPunctuation);
        }

        for resource in &self.resources {
            let subject = format!("resource {}", resource.name);
            if resource.sha256 == PLACEHOLDER_SHA256 {
                report(&subject, IssueKind::PlaceholderChecksum);
            }
            if !is_https(&resource.url) {
                report(&subject, IssueKind::InsecureUrl);
            }
        }

        issues
    }

    /// Audit and package the result for display.
    pub fn release_report(&self) -> ReleaseReport {
        let issues = self.release_issues();
        ReleaseReport {
            formula: self.name.clone(),
            release_ready: issues.is_empty(),
            issues,
        }
    }
}

fn is_https(url: &str) -> bool {
    url.starts_with("https://")
}
