//! Filesystem port for file I/O and directory listing.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PortError;

/// One file found while scanning a repository tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoFile {
    /// Path relative to the scanned root, `/`-separated.
    pub path: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Last modification time, when the producer knows it.
    pub modified_at: Option<DateTime<Utc>>,
}

impl RepoFile {
    /// Creates a file entry without a modification time.
    pub fn new(path: impl Into<String>, size_bytes: u64) -> Self {
        Self { path: path.into(), size_bytes, modified_at: None }
    }
}

/// Provides filesystem access for reading, writing, and scanning files.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Appends the given contents to an existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    fn append(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Recursively lists every regular file below `root`, skipping `.git/`.
    ///
    /// Paths are relative to `root` and sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    fn walk_files(&self, root: &Path) -> Result<Vec<RepoFile>, PortError>;
}
