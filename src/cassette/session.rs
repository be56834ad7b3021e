//! A recording session: one cassette recorder per port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Shared handle to a port's recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Per-port recorders writing into one timestamped directory.
pub struct RecordingSession {
    /// Filesystem recorder.
    pub fs: SharedRecorder,
    /// Git recorder.
    pub git: SharedRecorder,
    /// Clock recorder.
    pub clock: SharedRecorder,
    /// Shell recorder.
    pub shell: SharedRecorder,
    /// Repository-contents recorder.
    pub repo_api: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session writing into `<base>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory already exists or cannot be created.
    pub fn new(base: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);
        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let commit = head_commit();
        let recorder = |port: &str| -> SharedRecorder {
            Arc::new(Mutex::new(CassetteRecorder::new(
                output_dir.join(format!("{port}.cassette.yaml")),
                format!("{timestamp}-{port}"),
                &commit,
            )))
        };

        Ok(Self {
            fs: recorder("fs"),
            git: recorder("git"),
            clock: recorder("clock"),
            shell: recorder("shell"),
            repo_api: recorder("repo_api"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port cassette that recorded at least one interaction.
    ///
    /// All recording adapters must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let ports = [
            ("fs", self.fs),
            ("git", self.git),
            ("clock", self.clock),
            ("shell", self.shell),
            ("repo_api", self.repo_api),
        ];
        for (port, shared) in ports {
            let recorder = Arc::try_unwrap(shared)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            if recorder.is_empty() {
                continue;
            }
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
        }
        Ok(self.output_dir)
    }
}

/// HEAD of the current checkout, or `"unknown"` outside a repository.
fn head_commit() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(
            || {
                tracing::warn!("could not read HEAD commit for cassette metadata");
                "unknown".to_string()
            },
            |s| s.trim().to_string(),
        )
}
