//! Recording adapters: delegate to a live port and log every call to a cassette.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod repo_api;
pub mod shell;

use serde::Serialize;

use crate::cassette::session::SharedRecorder;

pub use clock::RecordingClock;
pub use filesystem::RecordingFileSystem;
pub use git::RecordingGitRepo;
pub use repo_api::RecordingRepoContents;
pub use shell::RecordingShellExecutor;

/// Records an infallible call.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize + ?Sized,
{
    let input = serde_json::to_value(input).unwrap_or_default();
    let output = serde_json::to_value(output).unwrap_or_default();
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}

/// Records a fallible call as `{"ok": v}` or `{"err": message}`.
pub(crate) fn record_result<I, T, E>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    I: Serialize + ?Sized,
    T: Serialize,
    E: std::fmt::Display,
{
    let output = match result {
        Ok(value) => serde_json::json!({ "ok": serde_json::to_value(value).unwrap_or_default() }),
        Err(err) => serde_json::json!({ "err": err.to_string() }),
    };
    let input = serde_json::to_value(input).unwrap_or_default();
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}
