//! Per-phase completion check of a roadmap against a file listing.

use crate::ports::RepoFile;

use super::matcher;
use super::{ChecklistItem, Phase, Roadmap, RoadmapError};

/// Completion of one phase.
///
/// `completed` and `missing` partition `phase.items`, keeping item order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseResult {
    /// The phase that was checked.
    pub phase: Phase,
    /// Items with at least one matching file.
    pub completed: Vec<ChecklistItem>,
    /// Items with no matching file.
    pub missing: Vec<ChecklistItem>,
}

impl PhaseResult {
    /// `"{phase}: {found}/{total} items found"`.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "{}: {}/{} items found",
            self.phase.name,
            self.completed.len(),
            self.phase.items.len()
        )
    }

    /// Returns `true` when nothing is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Results for every phase, in roadmap order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapStatus {
    /// One result per roadmap phase.
    pub phases: Vec<PhaseResult>,
}

impl RoadmapStatus {
    /// Looks up the result for a phase by name.
    #[must_use]
    pub fn phase(&self, name: &str) -> Option<&PhaseResult> {
        self.phases.iter().find(|result| result.phase.name == name)
    }

    /// Phases that still have missing items.
    pub fn incomplete(&self) -> impl Iterator<Item = &PhaseResult> {
        self.phases.iter().filter(|result| !result.is_complete())
    }
}

/// Checks every roadmap phase against `files`.
///
/// The order of `files` does not affect the result.
///
/// # Errors
///
/// Returns [`RoadmapError::InvalidInput`] if a file has an empty path.
pub fn check_roadmap(files: &[RepoFile], roadmap: &Roadmap) -> Result<RoadmapStatus, RoadmapError> {
    if let Some(index) = files.iter().position(|file| file.path.is_empty()) {
        return Err(RoadmapError::InvalidInput(format!("file #{index} has an empty path")));
    }

    let lowered: Vec<String> = files.iter().map(|file| file.path.to_lowercase()).collect();

    let phases = roadmap
        .phases()
        .iter()
        .map(|phase| {
            let (completed, missing) =
                phase.items.iter().cloned().partition(|item| matcher::matches(item, &lowered));
            PhaseResult { phase: phase.clone(), completed, missing }
        })
        .collect();

    Ok(RoadmapStatus { phases })
}
