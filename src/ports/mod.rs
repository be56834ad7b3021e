//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the tracker core and an
//! external system (time, filesystem, git, shell, repository API).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod repo_api;
pub mod shell;

pub use clock::Clock;
pub use filesystem::{FileSystem, RepoFile};
pub use git::{CommitRecord, GitRepo};
pub use repo_api::{ContentsFuture, RemoteEntry, RepoContents};
pub use shell::{ShellExecutor, ShellOutput};

/// Error type returned by every fallible port operation.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
