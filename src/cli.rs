//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::commit_logs::DEFAULT_MESSAGE;
use crate::config::parse_max_commits;
use crate::cuda::DEFAULT_OUTPUT;

/// Top-level CLI parser for `roadtrack`.
#[derive(Debug, Parser)]
#[command(name = "roadtrack", version, about = "Track project roadmap progress and keep logs committed")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sync the tracked repository and print a roadmap status report.
    Report(ReportArgs),
    /// Append a timestamped entry to log files and commit them.
    CommitLogs(CommitLogsArgs),
    /// Check for a CUDA-capable GPU and write the result to a file.
    CudaCheck {
        /// File the probe result is written to.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Print the active roadmap as YAML.
    Roadmap {
        /// Roadmap YAML file to load instead of the built-in one.
        #[arg(long)]
        roadmap: Option<PathBuf>,
    },
}

/// Flags for `roadtrack report`. Unset flags fall back to the environment.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Repository URL to clone.
    #[arg(long)]
    pub repo_url: Option<String>,
    /// Local clone directory.
    #[arg(long)]
    pub local_dir: Option<PathBuf>,
    /// Scan the local directory as-is, without cloning or pulling.
    #[arg(long)]
    pub no_clone: bool,
    /// Do not pull an existing clone.
    #[arg(long)]
    pub no_pull: bool,
    /// List the repository's top level through the GitHub contents API.
    #[arg(long, conflicts_with_all = ["no_clone", "no_pull"])]
    pub via_api: bool,
    /// Roadmap YAML file.
    #[arg(long)]
    pub roadmap: Option<PathBuf>,
    /// Number of recent commits to show.
    #[arg(long, value_parser = parse_max_commits)]
    pub max_commits: Option<usize>,
    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub output_file: Option<PathBuf>,
}

/// Flags for `roadtrack commit-logs`.
#[derive(Debug, Args)]
pub struct CommitLogsArgs {
    /// Working tree holding the log files.
    #[arg(long, default_value = ".")]
    pub repo_dir: PathBuf,
    /// Log file to update, relative to the repo dir. Repeatable.
    #[arg(long = "log-file")]
    pub log_files: Vec<String>,
    /// Commit message prefix.
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,
    /// Note added under the auto-update heading. Repeatable.
    #[arg(long = "note")]
    pub notes: Vec<String>,
    /// Pull with rebase and push after committing.
    #[arg(long)]
    pub push: bool,
    /// Remote to push to.
    #[arg(long, default_value = "origin")]
    pub remote: String,
    /// Branch to push.
    #[arg(long, default_value = "main")]
    pub branch: String,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_report_flags() {
        let cli = Cli::parse_from([
            "roadtrack",
            "report",
            "--no-clone",
            "--local-dir",
            "/tmp/clone",
            "--max-commits",
            "5",
        ]);
        let Command::Report(args) = cli.command else { panic!("expected report") };
        assert!(args.no_clone);
        assert_eq!(args.max_commits, Some(5));
        assert_eq!(args.local_dir.as_deref(), Some(std::path::Path::new("/tmp/clone")));
    }

    #[test]
    fn rejects_zero_commit_bound() {
        assert!(Cli::try_parse_from(["roadtrack", "report", "--max-commits", "0"]).is_err());
    }

    #[test]
    fn via_api_conflicts_with_no_clone() {
        assert!(Cli::try_parse_from(["roadtrack", "report", "--via-api", "--no-clone"]).is_err());
    }

    #[test]
    fn parses_repeated_log_files_and_notes() {
        let cli = Cli::parse_from([
            "roadtrack",
            "commit-logs",
            "--log-file",
            "a.md",
            "--log-file",
            "b.md",
            "--note",
            "first",
            "--push",
        ]);
        let Command::CommitLogs(args) = cli.command else { panic!("expected commit-logs") };
        assert_eq!(args.log_files, vec!["a.md", "b.md"]);
        assert_eq!(args.notes, vec!["first"]);
        assert!(args.push);
        assert_eq!(args.message, "Auto-commit: Updated logs");
    }

    #[test]
    fn cuda_check_has_default_output() {
        let cli = Cli::parse_from(["roadtrack", "cuda-check"]);
        let Command::CudaCheck { output } = cli.command else { panic!("expected cuda-check") };
        assert_eq!(output, std::path::PathBuf::from("cuda_check_log.txt"));
    }

    #[test]
    fn parses_roadmap_subcommand() {
        let cli = Cli::parse_from(["roadtrack", "roadmap"]);
        assert!(matches!(cli.command, Command::Roadmap { roadmap: None }));
    }
}
