//! `roadtrack roadmap` command.

use std::path::Path;

use crate::context::ServiceContext;

/// Prints the active roadmap as YAML, ready to be edited and passed back
/// with `--roadmap`.
///
/// # Errors
///
/// Returns an error string if the roadmap file cannot be loaded.
pub fn run(ctx: &ServiceContext, roadmap_path: Option<&Path>) -> Result<(), String> {
    let roadmap = super::load_roadmap(ctx, roadmap_path)?;
    let yaml = roadmap.to_yaml().map_err(|e| e.to_string())?;
    print!("{yaml}");
    Ok(())
}
