//! Recording adapter for the `RepoContents` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::{ContentsFuture, RepoContents};

/// Records contents listings while delegating to an inner client.
pub struct RecordingRepoContents {
    inner: Box<dyn RepoContents>,
    recorder: SharedRecorder,
}

impl RecordingRepoContents {
    /// Wraps `inner`, logging to `recorder`.
    pub fn new(inner: Box<dyn RepoContents>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct UrlInput {
    url: String,
}

impl RepoContents for RecordingRepoContents {
    fn list_contents(&self, url: &str) -> ContentsFuture<'_> {
        let input = UrlInput { url: url.to_string() };
        Box::pin(async move {
            let result = self.inner.list_contents(&input.url).await;
            record_result(&self.recorder, "repo_api", "list_contents", &input, &result);
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::adapters::replaying::testing::replayer;
    use crate::adapters::replaying::ReplayingRepoContents;
    use crate::adapters::recording::testing::{recorded, recorder};
    use serde_json::json;

    #[tokio::test]
    async fn records_listing_with_url() {
        let inner = ReplayingRepoContents::new(replayer(&[(
            "repo_api",
            "list_contents",
            json!({"ok": [{"name": "train.py", "type": "file", "size": 900}]}),
        )]));
        let shared = recorder("repo_api");
        {
            let api = RecordingRepoContents::new(Box::new(inner), Arc::clone(&shared));
            let entries = api.list_contents("https://api.github.com/repos/o/r/contents").await.unwrap();
            assert_eq!(entries[0].name, "train.py");
        }

        let interactions = recorded(shared);
        assert_eq!(interactions[0].input["url"], json!("https://api.github.com/repos/o/r/contents"));
        assert_eq!(interactions[0].output["ok"][0]["type"], json!("file"));
    }
}
