//! Repository-listing port for a hosted repository's contents API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::PortError;

/// Boxed future type alias used by [`RepoContents`] to keep the trait dyn-compatible.
pub type ContentsFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<RemoteEntry>, PortError>> + Send + 'a>>;

/// One top-level entry of a remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEntry {
    /// Entry name.
    pub name: String,
    /// Entry kind as reported by the host (`file`, `dir`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Size in bytes (zero for directories).
    pub size: u64,
}

/// Lists the contents of a remote repository without cloning it.
pub trait RepoContents: Send + Sync {
    /// Fetches the entries at the contents endpoint `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the host answers with a
    /// non-success status.
    fn list_contents(&self, url: &str) -> ContentsFuture<'_>;
}
