//! Packaging formula model for `enhance-this`.
//!
//! The Homebrew formula is kept as a YAML manifest (`packaging/<name>.yaml`)
//! and rendered to Ruby (`Formula/<name>.rb`). Loading validates structure;
//! release readiness (placeholder checksums, provisional URLs) is a separate
//! audit so a draft formula can still be rendered and tested.

mod model;
mod operations;
mod release;
mod render;


pub use model::{Formula, PLACEHOLDER_SHA256, Resource, SmokeTest};
pub use release::{IssueKind, ReleaseIssue, ReleaseReport};
