//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{FileSystem, RepoFile};
use crate::ports::PortError;

/// Serves recorded filesystem results. Writes are not performed.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        replay_result(next_output(&self.replayer, "fs", "read_to_string"), "fs::read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "fs", "write"), "fs::write")
    }

    fn append(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "fs", "append"), "fs::append")
    }

    fn exists(&self, _path: &Path) -> bool {
        next_output(&self.replayer, "fs", "exists")
            .as_bool()
            .expect("fs::exists: expected boolean output")
    }

    fn walk_files(&self, _root: &Path) -> Result<Vec<RepoFile>, PortError> {
        replay_result(next_output(&self.replayer, "fs", "walk_files"), "fs::walk_files")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::testing::replayer;
    use serde_json::json;

    #[test]
    fn replays_walk_files() {
        let fs = ReplayingFileSystem::new(replayer(&[(
            "fs",
            "walk_files",
            json!({"ok": [
                {"path": "README.md", "size_bytes": 12, "modified_at": "2025-02-01T10:00:00Z"},
                {"path": "src/model.py", "size_bytes": 300, "modified_at": null}
            ]}),
        )]));
        let files = fs.walk_files(Path::new("/repo")).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].path, "src/model.py");
        assert!(files[0].modified_at.is_some());
        assert!(files[1].modified_at.is_none());
    }

    #[test]
    fn replays_exists_and_write_error() {
        let fs = ReplayingFileSystem::new(replayer(&[
            ("fs", "exists", json!(false)),
            ("fs", "write", json!({"err": "permission denied"})),
        ]));
        assert!(!fs.exists(Path::new("phase1_log.md")));
        let err = fs.write(Path::new("/report.txt"), "x").unwrap_err();
        assert!(err.to_string().contains("permission denied"));
    }
}
