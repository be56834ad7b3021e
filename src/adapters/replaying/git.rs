//! Replaying adapter for the `GitRepo` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::git::{CommitRecord, GitRepo};
use crate::ports::PortError;

/// Serves recorded git results.
pub struct ReplayingGitRepo {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingGitRepo {
    /// Creates a replaying git repo from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn replay<T: serde::de::DeserializeOwned>(&self, method: &str) -> Result<T, PortError> {
        replay_result(next_output(&self.replayer, "git", method), &format!("git::{method}"))
    }
}

impl GitRepo for ReplayingGitRepo {
    fn clone_repo(&self, _url: &str, _dest: &Path) -> Result<(), PortError> {
        self.replay("clone_repo")
    }

    fn pull(&self, _repo: &Path) -> Result<(), PortError> {
        self.replay("pull")
    }

    fn pull_rebase(&self, _repo: &Path, _remote: &str, _branch: &str) -> Result<(), PortError> {
        self.replay("pull_rebase")
    }

    fn recent_commits(&self, _repo: &Path, _limit: usize) -> Result<Vec<CommitRecord>, PortError> {
        self.replay("recent_commits")
    }

    fn add(&self, _repo: &Path, _paths: &[String]) -> Result<(), PortError> {
        self.replay("add")
    }

    fn status_porcelain(&self, _repo: &Path) -> Result<String, PortError> {
        self.replay("status_porcelain")
    }

    fn commit(&self, _repo: &Path, _message: &str) -> Result<(), PortError> {
        self.replay("commit")
    }

    fn push(&self, _repo: &Path, _remote: &str, _branch: &str) -> Result<(), PortError> {
        self.replay("push")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::testing::replayer;
    use serde_json::json;

    #[test]
    fn replays_recent_commits() {
        let git = ReplayingGitRepo::new(replayer(&[(
            "git",
            "recent_commits",
            json!({"ok": [{
                "short_hash": "abc1234",
                "message": "Add phase1 log",
                "author": "Ada",
                "date": "2025-03-01T09:00:00+02:00"
            }]}),
        )]));
        let commits = git.recent_commits(Path::new("clone"), 10).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].short_hash, "abc1234");
        assert_eq!(commits[0].date.to_rfc3339(), "2025-03-01T09:00:00+02:00");
    }

    #[test]
    fn replays_push_rejection() {
        let git = ReplayingGitRepo::new(replayer(&[(
            "git",
            "push",
            json!({"err": "git push origin main failed: rejected"}),
        )]));
        let err = git.push(Path::new("."), "origin", "main").unwrap_err();
        assert!(err.to_string().contains("rejected"));
    }
}
