//! GPU / CUDA availability probe built on `nvidia-smi`.

use crate::ports::{PortError, ShellExecutor};

/// Query for device name and driver version, one GPU per line.
pub const QUERY_COMMAND: &str = "nvidia-smi --query-gpu=name,driver_version --format=csv,noheader";
/// Plain invocation whose banner carries the CUDA version.
pub const BANNER_COMMAND: &str = "nvidia-smi";
/// Default file the probe result is written to.
pub const DEFAULT_OUTPUT: &str = "cuda_check_log.txt";

/// What the probe found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CudaStatus {
    /// Whether a CUDA device answered.
    pub available: bool,
    /// Name of the first device, or `No GPU`.
    pub device: String,
    /// Driver version, or `N/A`.
    pub driver_version: String,
    /// CUDA version reported by the driver, or `N/A`.
    pub cuda_version: String,
}

impl CudaStatus {
    /// Status for a host without a usable device.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            device: "No GPU".to_string(),
            driver_version: "N/A".to_string(),
            cuda_version: "N/A".to_string(),
        }
    }

    /// Text written to the log file and printed.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "CUDA Available: {}\nDevice: {}\nDriver Version: {}\nCUDA Version: {}",
            self.available, self.device, self.driver_version, self.cuda_version
        )
    }
}

/// Probes the host through `shell`.
///
/// A missing or failing `nvidia-smi` means no device, not an error.
///
/// # Errors
///
/// Returns an error only when the shell itself cannot be spawned.
pub fn probe(shell: &dyn ShellExecutor) -> Result<CudaStatus, PortError> {
    let query = shell.run(QUERY_COMMAND)?;
    if !query.success() {
        tracing::debug!(exit_code = query.exit_code, stderr = %query.stderr.trim(), "nvidia-smi query failed");
        return Ok(CudaStatus::unavailable());
    }
    let Some(first) = query.stdout.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return Ok(CudaStatus::unavailable());
    };

    let (device, driver) = match first.rsplit_once(',') {
        Some((name, driver)) => (name.trim().to_string(), driver.trim().to_string()),
        None => (first.to_string(), "N/A".to_string()),
    };

    let banner = shell.run(BANNER_COMMAND)?;
    let cuda_version = if banner.success() { parse_cuda_version(&banner.stdout) } else { None };

    Ok(CudaStatus {
        available: true,
        device,
        driver_version: driver,
        cuda_version: cuda_version.unwrap_or_else(|| "N/A".to_string()),
    })
}

/// Extracts `X.Y` from the `CUDA Version: X.Y` field of the `nvidia-smi` banner.
#[must_use]
pub fn parse_cuda_version(banner: &str) -> Option<String> {
    let (_, rest) = banner.split_once("CUDA Version:")?;
    let version: String =
        rest.trim_start().chars().take_while(|c| c.is_ascii_digit() || *c == '.').collect();
    (!version.is_empty()).then_some(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::testing::replayer;
    use crate::adapters::replaying::ReplayingShellExecutor;
    use serde_json::json;

    const BANNER: &str = "\
+-----------------------------------------------------------------------------------------+
| NVIDIA-SMI 570.86.10              Driver Version: 570.86.10      CUDA Version: 12.8     |
|-----------------------------------------+------------------------+----------------------+";

    #[test]
    fn parses_cuda_version_from_banner() {
        assert_eq!(parse_cuda_version(BANNER), Some("12.8".to_string()));
        assert_eq!(parse_cuda_version("no version here"), None);
    }

    #[test]
    fn probe_reports_first_device() {
        let shell = ReplayingShellExecutor::new(replayer(&[
            (
                "shell",
                "run",
                json!({"ok": {"exit_code": 0, "stdout": "NVIDIA GeForce RTX 5090, 570.86.10\n", "stderr": ""}}),
            ),
            ("shell", "run", json!({"ok": {"exit_code": 0, "stdout": BANNER, "stderr": ""}})),
        ]));

        let status = probe(&shell).unwrap();
        assert!(status.available);
        assert_eq!(status.device, "NVIDIA GeForce RTX 5090");
        assert_eq!(status.driver_version, "570.86.10");
        assert_eq!(
            status.render(),
            "CUDA Available: true\nDevice: NVIDIA GeForce RTX 5090\nDriver Version: 570.86.10\nCUDA Version: 12.8"
        );
    }

    #[test]
    fn missing_nvidia_smi_means_no_gpu() {
        let shell = ReplayingShellExecutor::new(replayer(&[(
            "shell",
            "run",
            json!({"ok": {"exit_code": 127, "stdout": "", "stderr": "sh: nvidia-smi: not found"}}),
        )]));

        let status = probe(&shell).unwrap();
        assert_eq!(status, CudaStatus::unavailable());
        assert!(status.render().starts_with("CUDA Available: false\nDevice: No GPU\n"));
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let shell = ReplayingShellExecutor::new(replayer(&[(
            "shell",
            "run",
            json!({"err": "No such file or directory"}),
        )]));
        assert!(probe(&shell).is_err());
    }
}
