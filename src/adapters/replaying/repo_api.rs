//! Replaying adapter for the `RepoContents` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::repo_api::{ContentsFuture, RemoteEntry, RepoContents};

/// Serves recorded contents listings.
pub struct ReplayingRepoContents {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingRepoContents {
    /// Creates a replaying contents client from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl RepoContents for ReplayingRepoContents {
    fn list_contents(&self, _url: &str) -> ContentsFuture<'_> {
        let output = next_output(&self.replayer, "repo_api", "list_contents");
        Box::pin(async move {
            replay_result::<Vec<RemoteEntry>>(output, "repo_api::list_contents")
        })
    }
}
