//! Replaying adapters that serve recorded interactions from cassettes.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod repo_api;
pub mod shell;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

pub use clock::ReplayingClock;
pub use filesystem::ReplayingFileSystem;
pub use git::ReplayingGitRepo;
pub use repo_api::ReplayingRepoContents;
pub use shell::ReplayingShellExecutor;

/// Takes the recorded output of the next `port::method` interaction.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Decodes a recorded `{"ok": v}` / `{"err": msg}` output.
///
/// A bare value without either key is treated as `ok`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    let value = match output {
        serde_json::Value::Object(mut map) if map.contains_key("ok") => {
            map.remove("ok").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(value).map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

#[cfg(test)]
pub(crate) mod testing {
    use chrono::Utc;

    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;

    /// Builds a replayer from `(port, method, output)` triples.
    pub fn replayer(calls: &[(&str, &str, serde_json::Value)]) -> CassetteReplayer {
        let interactions = calls
            .iter()
            .enumerate()
            .map(|(seq, (port, method, output))| Interaction {
                seq: seq as u64,
                port: (*port).to_string(),
                method: (*method).to_string(),
                input: serde_json::json!({}),
                output: output.clone(),
            })
            .collect();
        CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replay_result_unwraps_ok() {
        let value: Vec<String> = replay_result(json!({"ok": ["a", "b"]}), "t").unwrap();
        assert_eq!(value, vec!["a", "b"]);
    }

    #[test]
    fn replay_result_accepts_bare_value() {
        let value: String = replay_result(json!("plain"), "t").unwrap();
        assert_eq!(value, "plain");
    }

    #[test]
    fn replay_result_surfaces_err() {
        let result: Result<(), _> = replay_result(json!({"err": "remote rejected"}), "t");
        assert_eq!(result.unwrap_err().to_string(), "remote rejected");
    }
}
