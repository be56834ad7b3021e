//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::clock::SystemClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::live::repo_api::GithubContents;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::recording::{
    RecordingClock, RecordingFileSystem, RecordingGitRepo, RecordingRepoContents,
    RecordingShellExecutor,
};
use crate::adapters::replaying::{
    ReplayingClock, ReplayingFileSystem, ReplayingGitRepo, ReplayingRepoContents,
    ReplayingShellExecutor,
};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{
    Clock, CommitRecord, ContentsFuture, FileSystem, GitRepo, PortError, RepoContents, RepoFile,
    ShellExecutor, ShellOutput,
};

/// Every external boundary a command may touch.
///
/// Commands receive a context and never reach the outside world directly, so
/// the same command code runs live, while recording, or from cassettes.
pub struct ServiceContext {
    /// Current time.
    pub clock: Box<dyn Clock>,
    /// File I/O and tree scanning.
    pub fs: Box<dyn FileSystem>,
    /// Git operations.
    pub git: Box<dyn GitRepo>,
    /// Shell commands.
    pub shell: Box<dyn ShellExecutor>,
    /// Remote repository listing.
    pub repo_api: Box<dyn RepoContents>,
}

impl ServiceContext {
    /// Wires up real adapters for every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn live() -> Result<Self, String> {
        let repo_api =
            GithubContents::new().map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            clock: Box::new(SystemClock),
            fs: Box::new(LiveFileSystem),
            git: Box::new(LiveGitRepo),
            shell: Box::new(LiveShellExecutor),
            repo_api: Box::new(repo_api),
        })
    }

    /// Live adapters whose calls are captured into `session`'s cassettes.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be built.
    pub fn recording(session: &RecordingSession) -> Result<Self, String> {
        let live = Self::live()?;
        Ok(Self {
            clock: Box::new(RecordingClock::new(live.clock, session.clock.clone())),
            fs: Box::new(RecordingFileSystem::new(live.fs, session.fs.clone())),
            git: Box::new(RecordingGitRepo::new(live.git, session.git.clone())),
            shell: Box::new(RecordingShellExecutor::new(live.shell, session.shell.clone())),
            repo_api: Box::new(RecordingRepoContents::new(
                live.repo_api,
                session.repo_api.clone(),
            )),
        })
    }

    /// Serves every port from one cassette file.
    ///
    /// Each port gets its own replayer, so per-port cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::load(path)?;
        let replayer = || CassetteReplayer::new(&cassette);
        Ok(Self {
            clock: Box::new(ReplayingClock::new(replayer())),
            fs: Box::new(ReplayingFileSystem::new(replayer())),
            git: Box::new(ReplayingGitRepo::new(replayer())),
            shell: Box::new(ReplayingShellExecutor::new(replayer())),
            repo_api: Box::new(ReplayingRepoContents::new(replayer())),
        })
    }

    /// Serves each port from its own cassette. Unconfigured ports panic when called.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        let clock: Box<dyn Clock> = match replayers.clock {
            Some(r) => Box::new(ReplayingClock::new(r)),
            None => Box::new(Unconfigured),
        };
        let fs: Box<dyn FileSystem> = match replayers.fs {
            Some(r) => Box::new(ReplayingFileSystem::new(r)),
            None => Box::new(Unconfigured),
        };
        let git: Box<dyn GitRepo> = match replayers.git {
            Some(r) => Box::new(ReplayingGitRepo::new(r)),
            None => Box::new(Unconfigured),
        };
        let shell: Box<dyn ShellExecutor> = match replayers.shell {
            Some(r) => Box::new(ReplayingShellExecutor::new(r)),
            None => Box::new(Unconfigured),
        };
        let repo_api: Box<dyn RepoContents> = match replayers.repo_api {
            Some(r) => Box::new(ReplayingRepoContents::new(r)),
            None => Box::new(Unconfigured),
        };
        Ok(Self { clock, fs, git, shell, repo_api })
    }
}

/// Stand-in for a port with no cassette; every call panics.
struct Unconfigured;

fn unconfigured(port: &str) -> ! {
    panic!("{port} port not configured in CassetteConfig: no cassette loaded")
}

impl Clock for Unconfigured {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        unconfigured("clock")
    }
}

impl FileSystem for Unconfigured {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        unconfigured("fs")
    }
    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        unconfigured("fs")
    }
    fn append(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        unconfigured("fs")
    }
    fn exists(&self, _path: &Path) -> bool {
        unconfigured("fs")
    }
    fn walk_files(&self, _root: &Path) -> Result<Vec<RepoFile>, PortError> {
        unconfigured("fs")
    }
}

impl GitRepo for Unconfigured {
    fn clone_repo(&self, _url: &str, _dest: &Path) -> Result<(), PortError> {
        unconfigured("git")
    }
    fn pull(&self, _repo: &Path) -> Result<(), PortError> {
        unconfigured("git")
    }
    fn pull_rebase(&self, _repo: &Path, _remote: &str, _branch: &str) -> Result<(), PortError> {
        unconfigured("git")
    }
    fn recent_commits(&self, _repo: &Path, _limit: usize) -> Result<Vec<CommitRecord>, PortError> {
        unconfigured("git")
    }
    fn add(&self, _repo: &Path, _paths: &[String]) -> Result<(), PortError> {
        unconfigured("git")
    }
    fn status_porcelain(&self, _repo: &Path) -> Result<String, PortError> {
        unconfigured("git")
    }
    fn commit(&self, _repo: &Path, _message: &str) -> Result<(), PortError> {
        unconfigured("git")
    }
    fn push(&self, _repo: &Path, _remote: &str, _branch: &str) -> Result<(), PortError> {
        unconfigured("git")
    }
}

impl ShellExecutor for Unconfigured {
    fn run(&self, _command: &str) -> Result<ShellOutput, PortError> {
        unconfigured("shell")
    }
}

impl RepoContents for Unconfigured {
    fn list_contents(&self, _url: &str) -> ContentsFuture<'_> {
        unconfigured("repo_api")
    }
}
