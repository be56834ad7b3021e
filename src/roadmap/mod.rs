//! Roadmap checklist model and completion checking.
//!
//! A [`Roadmap`] is an ordered list of [`Phase`]s, each naming the artifacts
//! expected in the repository once that phase is done. [`check_roadmap`]
//! compares the roadmap against a file listing.

pub mod check;
pub mod error;
pub mod matcher;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use check::{check_roadmap, PhaseResult, RoadmapStatus};
pub use error::RoadmapError;

/// Human-readable description of one expected artifact.
pub type ChecklistItem = String;

/// A named roadmap stage and its expected artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase name, unique within a roadmap.
    pub name: String,
    /// Expected artifacts, in display order.
    pub items: Vec<ChecklistItem>,
}

impl Phase {
    /// Creates a phase from a name and its items.
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), items: items.into_iter().map(Into::into).collect() }
    }
}

/// An immutable, validated, ordered list of phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roadmap {
    phases: Vec<Phase>,
}

impl Roadmap {
    /// Builds a roadmap, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::InvalidInput`] when there are no phases, a
    /// phase name is blank or repeated, or an item is blank.
    pub fn new(phases: Vec<Phase>) -> Result<Self, RoadmapError> {
        validate(&phases)?;
        Ok(Self { phases })
    }

    /// Parses a YAML sequence of `{name, items}` phases.
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Parse`] for malformed YAML and
    /// [`RoadmapError::InvalidInput`] when validation fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, RoadmapError> {
        let phases: Vec<Phase> = serde_yaml::from_str(yaml)?;
        Self::new(phases)
    }

    /// Serializes the roadmap in the format accepted by [`Roadmap::from_yaml`].
    ///
    /// # Errors
    ///
    /// Returns [`RoadmapError::Parse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, RoadmapError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Phases in roadmap order.
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// The checklist the tracker ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            phases: vec![
                Phase::new(
                    "Phase 1: Setup and Data Foundation",
                    [
                        "Environment setup (e.g., requirements.txt, venv)",
                        "Data collection scripts (e.g., gutenberg_downloader.py, oscar_loader.py)",
                        "Processed data files (e.g., train_data.pt, uh_ai_gutenberg_texts/)",
                        "Logs: phase1_log.md",
                    ],
                ),
                Phase::new(
                    "Phase 2: Model Architecture",
                    [
                        "Model code (e.g., model.py with MoE modifications)",
                        "Config files (e.g., gpt_config.py)",
                        "Test scripts (e.g., forward_pass_test.py)",
                        "Logs: phase2_log.md",
                    ],
                ),
                Phase::new(
                    "Phase 3: Training Pipeline",
                    [
                        "Training scripts (e.g., train.py mods)",
                        "Checkpoints (e.g., uh_ai_checkpoint.pt)",
                        "TensorBoard logs or loss curves",
                        "Logs: phase3_log.md",
                    ],
                ),
                Phase::new(
                    "Phase 4: Fine-Tuning and Alignment",
                    [
                        "Fine-tune scripts (e.g., sft.py, rlaif.py)",
                        "CAI constitution (e.g., cai_rules.json)",
                        "Aligned checkpoints",
                        "Logs: phase4_log.md",
                    ],
                ),
                Phase::new(
                    "Phase 5: Deployment and UI",
                    [
                        "API/UI code (e.g., api.py, ui.py with Gradio/FastAPI)",
                        "Deployment configs (e.g., Dockerfile)",
                        "Inference scripts (e.g., generate.py)",
                        "Logs: phase5_log.md",
                    ],
                ),
                Phase::new(
                    "Phase 6: Evaluation, Iteration, and Expansion",
                    [
                        "Eval scripts (e.g., benchmark.py for MMLU/perplexity)",
                        "Research summaries (e.g., 2025_AI_Advances_Summary.md)",
                        "Iteration logs (e.g., eval_results.md)",
                        "Multimodal/voice extensions (e.g., clip_integration.py)",
                    ],
                ),
                Phase::new(
                    "General",
                    [
                        "README.md (project overview)",
                        "UH_AI_Build_Roadmap.md (detailed plan/logs)",
                        ".gitignore",
                    ],
                ),
            ],
        }
    }
}

/// Checks the structural rules every roadmap must satisfy.
fn validate(phases: &[Phase]) -> Result<(), RoadmapError> {
    if phases.is_empty() {
        return Err(RoadmapError::InvalidInput("roadmap has no phases".into()));
    }
    let mut seen = HashSet::new();
    for phase in phases {
        if phase.name.trim().is_empty() {
            return Err(RoadmapError::InvalidInput("phase name is blank".into()));
        }
        if !seen.insert(phase.name.as_str()) {
            return Err(RoadmapError::InvalidInput(format!("duplicate phase name {:?}", phase.name)));
        }
        if phase.items.iter().any(|item| item.trim().is_empty()) {
            return Err(RoadmapError::InvalidInput(format!(
                "phase {:?} has a blank item",
                phase.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_roadmap_is_valid() {
        let builtin = Roadmap::builtin();
        assert_eq!(builtin.phases().len(), 7);
        assert_eq!(builtin.phases()[6].name, "General");
        assert!(Roadmap::new(builtin.phases().to_vec()).is_ok());
    }

    #[test]
    fn rejects_empty_roadmap() {
        assert!(matches!(Roadmap::new(vec![]), Err(RoadmapError::InvalidInput(_))));
    }

    #[test]
    fn rejects_duplicate_phase_names() {
        let result = Roadmap::new(vec![Phase::new("A", ["x"]), Phase::new("A", ["y"])]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate phase name"));
    }

    #[test]
    fn rejects_blank_names_and_items() {
        assert!(Roadmap::new(vec![Phase::new("  ", ["x"])]).is_err());
        assert!(Roadmap::new(vec![Phase::new("A", ["x", " "])]).is_err());
    }

    #[test]
    fn yaml_keeps_phase_order() {
        let yaml = "- name: Setup\n  items: [requirements.txt]\n- name: Ship\n  items: [Dockerfile, api.py]\n";
        let roadmap = Roadmap::from_yaml(yaml).unwrap();
        let names: Vec<&str> = roadmap.phases().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Setup", "Ship"]);
        assert_eq!(roadmap.phases()[1].items, vec!["Dockerfile", "api.py"]);
    }

    #[test]
    fn builtin_yaml_parses_back_to_itself() {
        let builtin = Roadmap::builtin();
        let parsed = Roadmap::from_yaml(&builtin.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, builtin);
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(Roadmap::from_yaml("name: [unclosed"), Err(RoadmapError::Parse(_))));
    }
}
