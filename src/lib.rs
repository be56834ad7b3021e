//! Core library entry for the `roadtrack` CLI.
//!
//! `roadtrack` checks a repository against a phased roadmap checklist and
//! renders a plain-text status report. It also appends timestamped entries to
//! project logs and commits them, and probes for a CUDA-capable GPU.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod cuda;
pub mod ports;
pub mod report;
pub mod roadmap;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are successful runs.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_prints_builtin_roadmap() {
        let result = run(["roadtrack", "roadmap"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["roadtrack", "--help"]).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["roadtrack", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_reports_unreadable_roadmap() {
        let err = run(["roadtrack", "roadmap", "--roadmap", "/nonexistent/roadmap.yaml"]).unwrap_err();
        assert!(err.contains("failed to read roadmap"));
    }
}
