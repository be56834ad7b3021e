//! `roadtrack commit-logs` command: append a timestamped entry to project logs
//! and commit them.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::context::ServiceContext;
use crate::report::TIMESTAMP_FORMAT;

/// Log files updated when none are given.
pub const DEFAULT_LOG_FILES: [&str; 2] = ["phase1_log.md", "UH_AI_Build_Roadmap.md"];
/// Commit message prefix used when none is given.
pub const DEFAULT_MESSAGE: &str = "Auto-commit: Updated logs";

/// Options for one commit-logs run.
#[derive(Debug, Clone)]
pub struct CommitLogsOptions {
    /// Working tree holding the log files.
    pub repo_dir: PathBuf,
    /// Log files, relative to `repo_dir`.
    pub log_files: Vec<String>,
    /// Commit message prefix; the timestamp is appended.
    pub message: String,
    /// Bullet lines added under the auto-update heading.
    pub notes: Vec<String>,
    /// Pull with rebase and push after committing.
    pub push: bool,
    /// Remote to push to.
    pub remote: String,
    /// Branch to push.
    pub branch: String,
}

impl Default for CommitLogsOptions {
    fn default() -> Self {
        Self {
            repo_dir: PathBuf::from("."),
            log_files: DEFAULT_LOG_FILES.iter().map(ToString::to_string).collect(),
            message: DEFAULT_MESSAGE.to_string(),
            notes: Vec::new(),
            push: false,
            remote: "origin".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// How far a run got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The working tree was clean after staging.
    NothingToCommit,
    /// A commit was made but not pushed.
    Committed,
    /// A commit was made and pushed.
    Pushed,
}

/// Heading plus note lines appended to each log file.
#[must_use]
pub fn log_entry(timestamp: &str, notes: &[String]) -> String {
    let mut entry = format!("\n## Auto-Update at {timestamp} UTC\n");
    for note in notes {
        entry.push_str("- ");
        entry.push_str(note);
        entry.push('\n');
    }
    entry
}

/// Commit message: `message` stamped with the same UTC time as the log entry.
#[must_use]
pub fn commit_message(message: &str, timestamp: &str) -> String {
    format!("{message} at {timestamp} UTC")
}

/// Appends the entry, stages the logs, and commits when the tree is dirty.
///
/// A failed push is reported but does not undo the commit.
///
/// # Errors
///
/// Returns an error string if staging, status, or commit fails.
pub fn run(ctx: &ServiceContext, options: &CommitLogsOptions) -> Result<CommitOutcome, String> {
    let repo = options.repo_dir.as_path();
    let timestamp = ctx.clock.now().format(TIMESTAMP_FORMAT).to_string();
    let entry = log_entry(&timestamp, &options.notes);

    let existing: Vec<String> =
        options.log_files.iter().filter(|file| ctx.fs.exists(&repo.join(file))).cloned().collect();
    for file in &options.log_files {
        if !existing.contains(file) {
            warn!(file = %file, "log file not found; skipping");
        }
    }
    for file in &existing {
        if let Err(e) = ctx.fs.append(&repo.join(file), &entry) {
            warn!(file = %file, error = %e, "failed to append log entry");
        }
    }

    if existing.is_empty() {
        println!("No changes to commit.");
        return Ok(CommitOutcome::NothingToCommit);
    }

    ctx.git.add(repo, &existing).map_err(|e| format!("git add failed: {e}"))?;
    let status = ctx.git.status_porcelain(repo).map_err(|e| format!("git status failed: {e}"))?;
    if status.trim().is_empty() {
        println!("No changes to commit.");
        return Ok(CommitOutcome::NothingToCommit);
    }
    debug!(changes = status.lines().count(), "working tree is dirty");

    let message = commit_message(&options.message, &timestamp);
    ctx.git.commit(repo, &message).map_err(|e| format!("git commit failed: {e}"))?;
    println!("Committed logs.");

    if !options.push {
        return Ok(CommitOutcome::Committed);
    }

    let pushed = ctx
        .git
        .pull_rebase(repo, &options.remote, &options.branch)
        .and_then(|()| ctx.git.push(repo, &options.remote, &options.branch));
    match pushed {
        Ok(()) => {
            println!("Pushed to {}.", options.branch);
            Ok(CommitOutcome::Pushed)
        }
        Err(e) => {
            warn!(remote = %options.remote, branch = %options.branch, error = %e, "push failed");
            eprintln!("Push to {}/{} failed: {e}", options.remote, options.branch);
            Ok(CommitOutcome::Committed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    fn context(name: &str, record: impl FnOnce(&mut CassetteRecorder)) -> ServiceContext {
        let dir = std::env::temp_dir().join(format!("roadtrack_commit_logs_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("commit_logs.cassette.yaml");
        let mut recorder = CassetteRecorder::new(&path, name, "abc");
        recorder.record("clock", "now", json!({}), json!("2025-06-15T10:30:00Z"));
        record(&mut recorder);
        recorder.finish().unwrap();
        let ctx = ServiceContext::replaying(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);
        ctx
    }

    #[test]
    fn entry_has_heading_and_notes() {
        let entry = log_entry("2025-06-15 10:30:00", &["trained epoch 3".into(), "fixed loader".into()]);
        assert_eq!(
            entry,
            "\n## Auto-Update at 2025-06-15 10:30:00 UTC\n- trained epoch 3\n- fixed loader\n"
        );
        assert_eq!(log_entry("t", &[]), "\n## Auto-Update at t UTC\n");
    }

    #[test]
    fn commit_message_carries_utc_like_the_heading() {
        let message = commit_message(DEFAULT_MESSAGE, "2025-06-15 10:30:00");
        assert_eq!(message, "Auto-commit: Updated logs at 2025-06-15 10:30:00 UTC");
        assert!(log_entry("2025-06-15 10:30:00", &[]).contains("at 2025-06-15 10:30:00 UTC"));
    }

    #[test]
    fn clean_tree_makes_no_commit() {
        // No git::commit interaction is recorded; committing would exhaust the cassette.
        let ctx = context("clean", |r| {
            r.record("fs", "exists", json!({"path": "./phase1_log.md"}), json!(true));
            r.record("fs", "exists", json!({"path": "./UH_AI_Build_Roadmap.md"}), json!(false));
            r.record("fs", "append", json!({"path": "./phase1_log.md"}), json!({"ok": null}));
            r.record("git", "add", json!({"paths": ["phase1_log.md"]}), json!({"ok": null}));
            r.record("git", "status_porcelain", json!({}), json!({"ok": ""}));
        });

        let outcome = run(&ctx, &CommitLogsOptions::default()).unwrap();
        assert_eq!(outcome, CommitOutcome::NothingToCommit);
    }

    #[test]
    fn dirty_tree_commits_and_pushes() {
        let ctx = context("push", |r| {
            r.record("fs", "exists", json!({}), json!(true));
            r.record("fs", "exists", json!({}), json!(true));
            r.record("fs", "append", json!({}), json!({"ok": null}));
            r.record("fs", "append", json!({}), json!({"ok": null}));
            r.record("git", "add", json!({}), json!({"ok": null}));
            r.record("git", "status_porcelain", json!({}), json!({"ok": " M phase1_log.md\n"}));
            r.record(
                "git",
                "commit",
                json!({"message": "Auto-commit: Updated logs at 2025-06-15 10:30:00 UTC"}),
                json!({"ok": null}),
            );
            r.record("git", "pull_rebase", json!({}), json!({"ok": null}));
            r.record("git", "push", json!({}), json!({"ok": null}));
        });

        let options = CommitLogsOptions { push: true, ..CommitLogsOptions::default() };
        assert_eq!(run(&ctx, &options).unwrap(), CommitOutcome::Pushed);
    }

    #[test]
    fn rejected_push_keeps_the_commit() {
        let ctx = context("rejected", |r| {
            r.record("fs", "exists", json!({}), json!(true));
            r.record("fs", "append", json!({}), json!({"ok": null}));
            r.record("git", "add", json!({}), json!({"ok": null}));
            r.record("git", "status_porcelain", json!({}), json!({"ok": "M  notes.md\n"}));
            r.record("git", "commit", json!({}), json!({"ok": null}));
            r.record("git", "pull_rebase", json!({}), json!({"err": "could not read from remote"}));
        });

        let options = CommitLogsOptions {
            log_files: vec!["notes.md".into()],
            push: true,
            ..CommitLogsOptions::default()
        };
        assert_eq!(run(&ctx, &options).unwrap(), CommitOutcome::Committed);
    }

    #[test]
    fn failed_staging_is_an_error() {
        let ctx = context("add_fails", |r| {
            r.record("fs", "exists", json!({}), json!(true));
            r.record("fs", "append", json!({}), json!({"ok": null}));
            r.record("git", "add", json!({}), json!({"err": "not a git repository"}));
        });

        let options =
            CommitLogsOptions { log_files: vec!["notes.md".into()], ..CommitLogsOptions::default() };
        let err = run(&ctx, &options).unwrap_err();
        assert!(err.contains("not a git repository"));
    }
}
