//! Plain-text status report rendering.

use std::fmt::Write;

use crate::ports::{CommitRecord, RepoFile};
use crate::roadmap::RoadmapStatus;

/// Timestamp format used throughout the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder emitted when there is no commit history.
pub const NO_COMMITS: &str = "No commits found";

/// Placeholder emitted when the file listing is empty.
pub const NO_FILES: &str = "No files found";

/// Line emitted when every roadmap item has been found.
pub const ALL_FOUND: &str = "- All roadmap items found. Keep going!";

/// Default report title.
pub const DEFAULT_TITLE: &str = "Project Repo Report";

/// Renders the report: files, commits, roadmap status, then suggestions.
#[must_use]
pub fn build_report(
    title: &str,
    files: &[RepoFile],
    commits: &[CommitRecord],
    status: &RoadmapStatus,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {title} ===");

    out.push_str("\nFiles Found:\n");
    if files.is_empty() {
        let _ = writeln!(out, "{NO_FILES}");
    }
    for file in files {
        let modified = file
            .modified_at
            .map_or_else(|| "N/A".to_string(), |at| at.format(TIMESTAMP_FORMAT).to_string());
        let _ = writeln!(
            out,
            "- {} (Size: {} bytes, Modified: {modified})",
            file.path, file.size_bytes
        );
    }

    out.push_str("\nRecent Commits:\n");
    if commits.is_empty() {
        let _ = writeln!(out, "{NO_COMMITS}");
    }
    for commit in commits {
        let _ = writeln!(
            out,
            "- {} [{}]: {} (by {})",
            commit.date.format(TIMESTAMP_FORMAT),
            commit.short_hash,
            commit.subject(),
            commit.author
        );
    }

    out.push_str("\nRoadmap Process Check:\n");
    for result in &status.phases {
        let _ = writeln!(out, "{}", result.status_line());
        let _ = writeln!(out, "  Completed: {}", join_or_none(&result.completed));
        let _ = writeln!(out, "  Missing: {}", join_or_none(&result.missing));
    }

    out.push_str("\nSuggestions:\n");
    let mut any_missing = false;
    for result in status.incomplete() {
        any_missing = true;
        let _ = writeln!(out, "- {}: add {}", result.phase.name, result.missing.join(", "));
    }
    if !any_missing {
        let _ = writeln!(out, "{ALL_FOUND}");
    }

    out
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
