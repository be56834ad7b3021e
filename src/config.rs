//! Tracker configuration: built-in defaults overridden by environment variables.
//!
//! `main` loads a `.env` file (via `dotenvy`) before this runs, and CLI flags
//! override whatever is resolved here.

use std::path::PathBuf;

/// Repository tracked when nothing else is configured.
pub const DEFAULT_REPO_URL: &str = "https://github.com/robertocardadeiro/UH_AI_Build.git";
/// Directory the repository is cloned into.
pub const DEFAULT_LOCAL_DIR: &str = "uh_ai_build_clone";
/// Number of commits shown in the report.
pub const DEFAULT_MAX_COMMITS: usize = 10;

/// Env var overriding [`DEFAULT_REPO_URL`].
pub const ENV_REPO_URL: &str = "ROADTRACK_REPO_URL";
/// Env var overriding [`DEFAULT_LOCAL_DIR`].
pub const ENV_LOCAL_DIR: &str = "ROADTRACK_LOCAL_DIR";
/// Env var setting the contents API URL explicitly.
pub const ENV_API_URL: &str = "ROADTRACK_API_URL";
/// Env var naming a roadmap YAML file.
pub const ENV_ROADMAP: &str = "ROADTRACK_ROADMAP";
/// Env var overriding [`DEFAULT_MAX_COMMITS`].
pub const ENV_MAX_COMMITS: &str = "ROADTRACK_MAX_COMMITS";
/// Env var enabling cassette recording into the given directory.
pub const ENV_RECORD: &str = "ROADTRACK_RECORD";

/// Resolved settings for the `report` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Clone URL of the tracked repository.
    pub repo_url: String,
    /// Local clone directory.
    pub local_dir: PathBuf,
    /// Explicit contents API URL; derived from `repo_url` when `None`.
    pub api_url: Option<String>,
    /// Roadmap YAML file; the built-in roadmap when `None`.
    pub roadmap_path: Option<PathBuf>,
    /// Commit history bound.
    pub max_commits: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            repo_url: DEFAULT_REPO_URL.to_string(),
            local_dir: PathBuf::from(DEFAULT_LOCAL_DIR),
            api_url: None,
            roadmap_path: None,
            max_commits: DEFAULT_MAX_COMMITS,
        }
    }
}

impl TrackerConfig {
    /// Resolves configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unusable value.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `ROADTRACK_MAX_COMMITS` is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_REPO_URL) {
            config.repo_url = url;
        }
        if let Some(dir) = get(ENV_LOCAL_DIR) {
            config.local_dir = PathBuf::from(dir);
        }
        config.api_url = get(ENV_API_URL);
        config.roadmap_path = get(ENV_ROADMAP).map(PathBuf::from);
        if let Some(raw) = get(ENV_MAX_COMMITS) {
            config.max_commits = parse_max_commits(&raw)
                .map_err(|e| format!("{ENV_MAX_COMMITS}={raw:?} is invalid: {e}"))?;
        }
        Ok(config)
    }

    /// Contents API URL: the explicit one, or one derived from `repo_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if no URL is configured and `repo_url` is not a
    /// GitHub repository URL.
    pub fn contents_api_url(&self) -> Result<String, String> {
        if let Some(url) = &self.api_url {
            return Ok(url.clone());
        }
        github_contents_url(&self.repo_url).ok_or_else(|| {
            format!("cannot derive a contents API URL from {:?}; set {ENV_API_URL}", self.repo_url)
        })
    }
}

/// Parses a commit bound; zero is rejected.
///
/// # Errors
///
/// Returns an error for non-numeric or zero values.
pub fn parse_max_commits(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Maps a GitHub clone URL to its REST contents endpoint.
///
/// Accepts `https://github.com/owner/repo(.git)` and `git@github.com:owner/repo(.git)`.
#[must_use]
pub fn github_contents_url(repo_url: &str) -> Option<String> {
    let rest = repo_url
        .strip_prefix("https://github.com/")
        .or_else(|| repo_url.strip_prefix("http://github.com/"))
        .or_else(|| repo_url.strip_prefix("git@github.com:"))?;
    let rest = rest.trim_end_matches('/');
    let rest = rest.strip_suffix(".git").unwrap_or(rest);
    let (owner, repo) = rest.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some(format!("https://api.github.com/repos/{owner}/{repo}/contents"))
}
