//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Cassette file to replay for each port. A `None` port panics when called.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Filesystem port cassette.
    pub fs: Option<PathBuf>,
    /// Git port cassette.
    pub git: Option<PathBuf>,
    /// Clock port cassette.
    pub clock: Option<PathBuf>,
    /// Shell port cassette.
    pub shell: Option<PathBuf>,
    /// Repository-contents port cassette.
    pub repo_api: Option<PathBuf>,
}

/// Replayers built from a [`CassetteConfig`].
pub struct PortReplayers {
    /// Filesystem replayer.
    pub fs: Option<CassetteReplayer>,
    /// Git replayer.
    pub git: Option<CassetteReplayer>,
    /// Clock replayer.
    pub clock: Option<CassetteReplayer>,
    /// Shell replayer.
    pub shell: Option<CassetteReplayer>,
    /// Repository-contents replayer.
    pub repo_api: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Uses the cassettes a recording session wrote into `dir`
    /// (`<port>.cassette.yaml`), skipping ports whose file is absent.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        let pick = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self {
            fs: pick("fs"),
            git: pick("git"),
            clock: pick("clock"),
            shell: pick("shell"),
            repo_api: pick("repo_api"),
        }
    }

    /// Reads one cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        Cassette::from_yaml(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let replayer = |path: &Option<PathBuf>| -> Result<Option<CassetteReplayer>, String> {
            path.as_deref().map(|p| Self::load(p).map(|c| CassetteReplayer::new(&c))).transpose()
        };
        Ok(PortReplayers {
            fs: replayer(&self.fs)?,
            git: replayer(&self.git)?,
            clock: replayer(&self.clock)?,
            shell: replayer(&self.shell)?,
            repo_api: replayer(&self.repo_api)?,
        })
    }
}
