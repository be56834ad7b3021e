//! `roadtrack cuda-check` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::cuda;

/// Probes for a CUDA device, prints the result, and writes it to `output`.
///
/// A probe failure is reported as `Error: ...` in both places.
///
/// # Errors
///
/// Returns an error string if `output` cannot be written.
pub fn run(ctx: &ServiceContext, output: &Path) -> Result<(), String> {
    let text = match cuda::probe(ctx.shell.as_ref()) {
        Ok(status) => status.render(),
        Err(e) => {
            tracing::warn!(error = %e, "CUDA probe failed");
            format!("Error: {e}")
        }
    };

    println!("{text}");
    ctx.fs
        .write(output, &text)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))
}
