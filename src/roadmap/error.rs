//! Errors raised by roadmap construction and checking.

use thiserror::Error;

/// Failure to build or evaluate a roadmap.
#[derive(Debug, Error)]
pub enum RoadmapError {
    /// The roadmap or the file list violates an input rule.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A roadmap file could not be parsed.
    #[error("failed to parse roadmap: {0}")]
    Parse(#[from] serde_yaml::Error),
}
