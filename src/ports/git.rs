//! Git repository port for version-control operations.

use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::PortError;

/// Summary of a single commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Abbreviated commit hash.
    pub short_hash: String,
    /// Full commit message, trimmed.
    pub message: String,
    /// Author name.
    pub author: String,
    /// Author date in the author's own offset.
    pub date: DateTime<FixedOffset>,
}

impl CommitRecord {
    /// First line of the commit message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

/// Drives a git repository on disk.
///
/// Every method takes the working-tree directory it operates on.
pub trait GitRepo: Send + Sync {
    /// Clones `url` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone fails.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError>;

    /// Pulls the tracked upstream branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the pull fails.
    fn pull(&self, repo: &Path) -> Result<(), PortError>;

    /// Pulls `branch` from `remote` with `--rebase`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pull fails.
    fn pull_rebase(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), PortError>;

    /// Returns at most `limit` commits, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if `repo` is not a repository or has no commits.
    fn recent_commits(&self, repo: &Path, limit: usize) -> Result<Vec<CommitRecord>, PortError>;

    /// Stages the given paths.
    ///
    /// # Errors
    ///
    /// Returns an error if staging fails.
    fn add(&self, repo: &Path, paths: &[String]) -> Result<(), PortError>;

    /// Returns `git status --porcelain` output.
    ///
    /// # Errors
    ///
    /// Returns an error if the status cannot be read.
    fn status_porcelain(&self, repo: &Path) -> Result<String, PortError>;

    /// Commits the staged changes with `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    fn commit(&self, repo: &Path, message: &str) -> Result<(), PortError>;

    /// Pushes `branch` to `remote`.
    ///
    /// # Errors
    ///
    /// Returns an error if the push is rejected or the remote is unreachable.
    fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), PortError>;
}
