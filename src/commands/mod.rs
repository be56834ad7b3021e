//! Command dispatch and handlers.

pub mod commit_logs;
pub mod cuda_check;
pub mod report;
pub mod roadmap;

use std::env;
use std::path::Path;

use crate::cassette::session::RecordingSession;
use crate::cli::{Command, CommitLogsArgs, ReportArgs};
use crate::config::{TrackerConfig, ENV_RECORD};
use crate::context::ServiceContext;
use crate::roadmap::Roadmap;

use self::commit_logs::CommitLogsOptions;
use self::report::ReportOptions;

/// Dispatch a parsed command to its handler.
///
/// When `ROADTRACK_RECORD` is set to a directory path, all port interactions
/// are recorded to per-port cassette files under that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let session = match env::var(ENV_RECORD) {
        Ok(dir) if !dir.trim().is_empty() => Some(RecordingSession::new(Path::new(&dir))?),
        _ => None,
    };
    let ctx = match &session {
        Some(session) => ServiceContext::recording(session)?,
        None => ServiceContext::live()?,
    };

    let result = dispatch_with_context(command, &ctx);

    if let Some(session) = session {
        // Drop the context first to release its recorder handles.
        drop(ctx);
        let output_dir = session.finish()?;
        eprintln!("Recording saved to: {}", output_dir.display());
    }

    result
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Report(args) => {
            let config = TrackerConfig::from_env()?;
            report::run(ctx, &report_options(config, args))
        }
        Command::CommitLogs(args) => {
            commit_logs::run(ctx, &commit_logs_options(args)).map(|_| ())
        }
        Command::CudaCheck { output } => cuda_check::run(ctx, output),
        Command::Roadmap { roadmap: path } => {
            let config = TrackerConfig::from_env()?;
            roadmap::run(ctx, path.as_deref().or(config.roadmap_path.as_deref()))
        }
    }
}

/// Layers CLI flags over the environment-derived configuration.
#[must_use]
pub fn report_options(mut config: TrackerConfig, args: &ReportArgs) -> ReportOptions {
    if let Some(url) = &args.repo_url {
        config.repo_url.clone_from(url);
    }
    if let Some(dir) = &args.local_dir {
        config.local_dir.clone_from(dir);
    }
    if let Some(path) = &args.roadmap {
        config.roadmap_path = Some(path.clone());
    }
    if let Some(n) = args.max_commits {
        config.max_commits = n;
    }
    ReportOptions {
        config,
        clone: !args.no_clone,
        pull: !args.no_clone && !args.no_pull,
        via_api: args.via_api,
        output_file: args.output_file.clone(),
    }
}

fn commit_logs_options(args: &CommitLogsArgs) -> CommitLogsOptions {
    let defaults = CommitLogsOptions::default();
    CommitLogsOptions {
        repo_dir: args.repo_dir.clone(),
        log_files: if args.log_files.is_empty() { defaults.log_files } else { args.log_files.clone() },
        message: args.message.clone(),
        notes: args.notes.clone(),
        push: args.push,
        remote: args.remote.clone(),
        branch: args.branch.clone(),
    }
}

/// Loads the roadmap at `path` through the filesystem port, or the built-in
/// roadmap when no path is given.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or is not a valid roadmap.
pub fn load_roadmap(ctx: &ServiceContext, path: Option<&Path>) -> Result<Roadmap, String> {
    let Some(path) = path else {
        return Ok(Roadmap::builtin());
    };
    let yaml = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("failed to read roadmap {}: {e}", path.display()))?;
    Roadmap::from_yaml(&yaml).map_err(|e| format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cassette::config::CassetteConfig;
    use crate::cli::Cli;

    fn parse_report(args: &[&str]) -> ReportArgs {
        let argv = ["roadtrack", "report"].into_iter().chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Report(args) => args,
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn flags_override_configuration() {
        let args = parse_report(&["--repo-url", "https://github.com/ada/engine", "--max-commits", "3"]);
        let options = report_options(TrackerConfig::default(), &args);
        assert_eq!(options.config.repo_url, "https://github.com/ada/engine");
        assert_eq!(options.config.max_commits, 3);
        assert_eq!(options.config.local_dir, PathBuf::from("uh_ai_build_clone"));
        assert!(options.clone && options.pull && !options.via_api);
    }

    #[test]
    fn no_clone_also_skips_pull() {
        let options = report_options(TrackerConfig::default(), &parse_report(&["--no-clone"]));
        assert!(!options.clone);
        assert!(!options.pull);
    }

    #[test]
    fn missing_roadmap_path_uses_builtin() {
        let ctx = ServiceContext::replaying_from(&CassetteConfig::default()).unwrap();
        assert_eq!(load_roadmap(&ctx, None).unwrap(), Roadmap::builtin());
    }

    #[test]
    fn commit_logs_defaults_fill_log_files() {
        let cli = Cli::try_parse_from(["roadtrack", "commit-logs", "--note", "done"]).unwrap();
        let Command::CommitLogs(args) = cli.command else { panic!("expected commit-logs") };
        let options = commit_logs_options(&args);
        assert_eq!(options.log_files, vec!["phase1_log.md", "UH_AI_Build_Roadmap.md"]);
        assert_eq!(options.notes, vec!["done"]);
        assert_eq!(options.remote, "origin");
        assert_eq!(options.branch, "main");
    }
}
