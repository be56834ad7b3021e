//! On-disk cassette structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One call made through a port, with what went in and what came out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name (`fs`, `git`, `shell`, `clock`, `repo_api`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments passed to the port.
    pub input: serde_json::Value,
    /// Value returned by the port. Fallible calls use `{"ok": v}` / `{"err": msg}`.
    pub output: serde_json::Value,
}

/// An ordered recording of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name.
    pub name: String,
    /// When the recording was made.
    pub recorded_at: DateTime<Utc>,
    /// Commit of the tool's own checkout at recording time.
    pub commit: String,
    /// Recorded interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not describe a cassette.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_cassette() {
        let yaml = r#"
name: clone-and-scan
recorded_at: 2025-04-01T08:00:00Z
commit: deadbeef
interactions:
  - seq: 0
    port: git
    method: clone_repo
    input: {url: "https://example.com/repo.git", dest: "clone"}
    output: {ok: null}
  - seq: 1
    port: fs
    method: walk_files
    input: {path: "clone"}
    output: {ok: [{path: README.md, size_bytes: 10, modified_at: null}]}
"#;
        let cassette = Cassette::from_yaml(yaml).unwrap();

        assert_eq!(cassette.name, "clone-and-scan");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[1].port, "fs");
        assert_eq!(cassette.interactions[0].output, json!({"ok": null}));
    }
}
