//! Live git adapter using `git` CLI commands.

use std::path::Path;
use std::process::Command;

use chrono::DateTime;

use crate::ports::git::{CommitRecord, GitRepo};
use crate::ports::PortError;

/// Field separator used in the `git log` format string.
const FIELD_SEP: char = '\u{1f}';
/// Record separator used in the `git log` format string.
const RECORD_SEP: char = '\u{1e}';

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

/// Runs `git` (optionally with `-C repo`) and returns its stdout.
fn run_git(repo: Option<&Path>, args: &[&str]) -> Result<String, PortError> {
    let mut command = Command::new("git");
    if let Some(dir) = repo {
        command.arg("-C").arg(dir);
    }
    let output = command.args(args).output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("git {} failed: {}", args.join(" "), stderr.trim()).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parses `git log` output produced with [`LOG_FORMAT`].
///
/// # Errors
///
/// Returns an error if a record is truncated or carries an unparseable date.
pub fn parse_log(raw: &str) -> Result<Vec<CommitRecord>, PortError> {
    let mut commits = Vec::new();
    for record in raw.split(RECORD_SEP) {
        let record = record.trim_start_matches('\n');
        if record.trim().is_empty() {
            continue;
        }
        let mut fields = record.splitn(4, FIELD_SEP);
        let (Some(hash), Some(date), Some(author), Some(message)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(format!("malformed git log record: {record:?}").into());
        };
        let date = DateTime::parse_from_rfc3339(date.trim())
            .map_err(|e| format!("bad commit date {date:?}: {e}"))?;
        commits.push(CommitRecord {
            short_hash: hash.trim().to_string(),
            message: message.trim().to_string(),
            author: author.to_string(),
            date,
        });
    }
    Ok(commits)
}

/// `git log` format: short hash, strict ISO author date, author name, body.
pub const LOG_FORMAT: &str = "--format=%h%x1f%aI%x1f%an%x1f%B%x1e";

impl GitRepo for LiveGitRepo {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError> {
        let dest = dest.to_str().ok_or("clone destination is not valid UTF-8")?;
        run_git(None, &["clone", url, dest]).map(drop)
    }

    fn pull(&self, repo: &Path) -> Result<(), PortError> {
        run_git(Some(repo), &["pull"]).map(drop)
    }

    fn pull_rebase(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), PortError> {
        run_git(Some(repo), &["pull", remote, branch, "--rebase"]).map(drop)
    }

    fn recent_commits(&self, repo: &Path, limit: usize) -> Result<Vec<CommitRecord>, PortError> {
        let limit = limit.to_string();
        let raw = run_git(Some(repo), &["log", "-n", &limit, LOG_FORMAT])?;
        parse_log(&raw)
    }

    fn add(&self, repo: &Path, paths: &[String]) -> Result<(), PortError> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        run_git(Some(repo), &args).map(drop)
    }

    fn status_porcelain(&self, repo: &Path) -> Result<String, PortError> {
        run_git(Some(repo), &["status", "--porcelain"])
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<(), PortError> {
        run_git(Some(repo), &["commit", "-m", message]).map(drop)
    }

    fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), PortError> {
        run_git(Some(repo), &["push", remote, branch]).map(drop)
    }
}
