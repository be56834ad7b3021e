//! `roadtrack report` command: sync, list, check, render.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::TrackerConfig;
use crate::context::ServiceContext;
use crate::ports::{CommitRecord, RepoFile};
use crate::report::{build_report, DEFAULT_TITLE};
use crate::roadmap::check_roadmap;

/// Resolved options for one report run.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Repository, clone directory, roadmap and commit bound.
    pub config: TrackerConfig,
    /// Clone the repository when the local directory is missing.
    pub clone: bool,
    /// Pull when the local directory already exists.
    pub pull: bool,
    /// List the repository through the contents API instead of a clone.
    pub via_api: bool,
    /// Write the report here instead of stdout.
    pub output_file: Option<PathBuf>,
}

impl ReportOptions {
    /// Options that sync the clone and print to stdout.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self { config, clone: true, pull: true, via_api: false, output_file: None }
    }
}

/// Generates the report and writes it out.
///
/// # Errors
///
/// Returns an error string if the roadmap is invalid or the output file
/// cannot be written.
pub fn run(ctx: &ServiceContext, options: &ReportOptions) -> Result<(), String> {
    let report = generate(ctx, options)?;
    match &options.output_file {
        Some(path) => {
            ctx.fs
                .write(path, &report)
                .map_err(|e| format!("failed to write report to {}: {e}", path.display()))?;
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}

/// Collects files and commits, checks the roadmap, and renders the report.
///
/// Sync and listing failures degrade to empty sections.
///
/// # Errors
///
/// Returns an error string if the roadmap cannot be loaded or a listed file
/// has an empty path.
pub fn generate(ctx: &ServiceContext, options: &ReportOptions) -> Result<String, String> {
    let config = &options.config;
    let roadmap = super::load_roadmap(ctx, config.roadmap_path.as_deref())?;

    let (files, commits) = if options.via_api {
        (list_remote(ctx, config), Vec::new())
    } else {
        sync_clone(ctx, options);
        (list_local(ctx, config), recent_commits(ctx, config))
    };
    debug!(files = files.len(), commits = commits.len(), "collected repository state");

    let status = check_roadmap(&files, &roadmap).map_err(|e| e.to_string())?;
    Ok(build_report(DEFAULT_TITLE, &files, &commits, &status))
}

fn sync_clone(ctx: &ServiceContext, options: &ReportOptions) {
    let config = &options.config;
    let dir = &config.local_dir;

    if ctx.fs.exists(dir) {
        if !options.pull {
            return;
        }
        match ctx.git.pull(dir) {
            Ok(()) => eprintln!("Pulled latest changes."),
            Err(e) => warn!(dir = %dir.display(), error = %e, "git pull failed; using local state"),
        }
    } else if options.clone {
        match ctx.git.clone_repo(&config.repo_url, dir) {
            Ok(()) => eprintln!("Cloned {} into {}", config.repo_url, dir.display()),
            Err(e) => warn!(url = %config.repo_url, error = %e, "git clone failed"),
        }
    } else {
        warn!(dir = %dir.display(), "local directory is missing and cloning is disabled");
    }
}

fn list_local(ctx: &ServiceContext, config: &TrackerConfig) -> Vec<RepoFile> {
    ctx.fs.walk_files(&config.local_dir).unwrap_or_else(|e| {
        warn!(dir = %config.local_dir.display(), error = %e, "failed to list files");
        Vec::new()
    })
}

fn recent_commits(ctx: &ServiceContext, config: &TrackerConfig) -> Vec<CommitRecord> {
    ctx.git.recent_commits(&config.local_dir, config.max_commits).unwrap_or_else(|e| {
        warn!(dir = %config.local_dir.display(), error = %e, "failed to read commit history");
        Vec::new()
    })
}

fn list_remote(ctx: &ServiceContext, config: &TrackerConfig) -> Vec<RepoFile> {
    let url = match config.contents_api_url() {
        Ok(url) => url,
        Err(e) => {
            warn!("{e}");
            return Vec::new();
        }
    };
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            warn!(error = %e, "failed to start async runtime");
            return Vec::new();
        }
    };

    match runtime.block_on(ctx.repo_api.list_contents(&url)) {
        Ok(entries) => entries.into_iter().map(|entry| RepoFile::new(entry.name, entry.size)).collect(),
        Err(e) => {
            warn!(%url, error = %e, "failed to list repository contents");
            Vec::new()
        }
    }
}
