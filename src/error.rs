//! Error types for the Sentinel file integrity monitor.

use std::path::PathBuf;
use thiserror::Error;

/// Fingerprint parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    #[error("expected {expected} hex characters, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("invalid character {0:?} (fingerprints are lowercase hex)")]
    Character(char),
}

/// Tree scanning errors
///
/// Per-file failures are not represented here; they are recorded as skips in
/// the scan report and never abort a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan target not found: {}", .0.display())]
    TargetMissing(PathBuf),

    #[error("Scan target is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Baseline storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Baseline {} is malformed: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("Baseline I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize baseline: {0}")]
    Serialize(String),
}

/// Errors surfaced by the initialize/check workflows
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("No baseline found at {}", .0.display())]
    BaselineMissing(PathBuf),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Top-level error for the CLI and configuration layers
#[derive(Debug, Error)]
pub enum SentinelError {
    #[error(transparent)]
    Monitor(#[from] MonitorError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for SentinelError {
    fn from(err: config::ConfigError) -> Self {
        SentinelError::ConfigError(err.to_string())
    }
}

impl From<ScanError> for SentinelError {
    fn from(err: ScanError) -> Self {
        SentinelError::Monitor(MonitorError::Scan(err))
    }
}

impl From<StoreError> for SentinelError {
    fn from(err: StoreError) -> Self {
        SentinelError::Monitor(MonitorError::Store(err))
    }
}
