//! Recording adapter for the `GitRepo` port.

use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::{CommitRecord, GitRepo, PortError};

/// Records git calls while delegating to an inner implementation.
pub struct RecordingGitRepo {
    inner: Box<dyn GitRepo>,
    recorder: SharedRecorder,
}

impl RecordingGitRepo {
    /// Wraps `inner`, logging to `recorder`.
    pub fn new(inner: Box<dyn GitRepo>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }

    fn record<T: Serialize>(
        &self,
        method: &str,
        input: &serde_json::Value,
        result: &Result<T, PortError>,
    ) {
        record_result(&self.recorder, "git", method, input, result);
    }
}

fn repo_input(repo: &Path) -> serde_json::Value {
    serde_json::json!({ "repo": repo.display().to_string() })
}

impl GitRepo for RecordingGitRepo {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError> {
        let result = self.inner.clone_repo(url, dest);
        let input = serde_json::json!({ "url": url, "dest": dest.display().to_string() });
        self.record("clone_repo", &input, &result);
        result
    }

    fn pull(&self, repo: &Path) -> Result<(), PortError> {
        let result = self.inner.pull(repo);
        self.record("pull", &repo_input(repo), &result);
        result
    }

    fn pull_rebase(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), PortError> {
        let result = self.inner.pull_rebase(repo, remote, branch);
        let input = serde_json::json!({
            "repo": repo.display().to_string(),
            "remote": remote,
            "branch": branch,
        });
        self.record("pull_rebase", &input, &result);
        result
    }

    fn recent_commits(&self, repo: &Path, limit: usize) -> Result<Vec<CommitRecord>, PortError> {
        let result = self.inner.recent_commits(repo, limit);
        let input = serde_json::json!({ "repo": repo.display().to_string(), "limit": limit });
        self.record("recent_commits", &input, &result);
        result
    }

    fn add(&self, repo: &Path, paths: &[String]) -> Result<(), PortError> {
        let result = self.inner.add(repo, paths);
        let input = serde_json::json!({ "repo": repo.display().to_string(), "paths": paths });
        self.record("add", &input, &result);
        result
    }

    fn status_porcelain(&self, repo: &Path) -> Result<String, PortError> {
        let result = self.inner.status_porcelain(repo);
        self.record("status_porcelain", &repo_input(repo), &result);
        result
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<(), PortError> {
        let result = self.inner.commit(repo, message);
        let input = serde_json::json!({ "repo": repo.display().to_string(), "message": message });
        self.record("commit", &input, &result);
        result
    }

    fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<(), PortError> {
        let result = self.inner.push(repo, remote, branch);
        let input = serde_json::json!({
            "repo": repo.display().to_string(),
            "remote": remote,
            "branch": branch,
        });
        self.record("push", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::replaying::testing::replayer;
    use crate::adapters::replaying::ReplayingGitRepo;
    use crate::adapters::recording::testing::{recorded, recorder};
    use serde_json::json;

    #[test]
    fn records_commit_message_and_outcome() {
        let inner = ReplayingGitRepo::new(replayer(&[
            ("git", "commit", json!({"ok": null})),
            ("git", "push", json!({"err": "rejected"})),
        ]));
        let shared = recorder("git");
        {
            let git = RecordingGitRepo::new(Box::new(inner), Arc::clone(&shared));
            git.commit(Path::new("repo"), "Auto-commit at 2025-01-01 00:00:00 UTC").unwrap();
            assert!(git.push(Path::new("repo"), "origin", "main").is_err());
        }

        let interactions = recorded(shared);
        assert_eq!(interactions[0].input["message"], json!("Auto-commit at 2025-01-01 00:00:00 UTC"));
        assert_eq!(interactions[0].output, json!({"ok": null}));
        assert_eq!(interactions[1].output, json!({"err": "rejected"}));
    }
}
