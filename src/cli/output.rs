//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{MonitorError, ScanError, SentinelError, StoreError};

/// Map domain/service errors to a string for CLI output, with a hint where
/// the operator can act on it.
pub fn map_error(e: &SentinelError) -> String {
    match e {
        SentinelError::Monitor(MonitorError::BaselineMissing(path)) => format!(
            "[-] No baseline found at {}. Run `sentinel init` first.",
            path.display()
        ),
        SentinelError::Monitor(MonitorError::Scan(ScanError::TargetMissing(path))) => format!(
            "[-] Target directory does not exist: {}",
            path.display()
        ),
        SentinelError::Monitor(MonitorError::Store(StoreError::Malformed { path, reason })) => {
            format!(
                "[-] Baseline {} is corrupted ({}). Re-run `sentinel init` once the tree is trusted.",
                path.display(),
                reason
            )
        }
        other => format!("[-] {}", other),
    }
}
