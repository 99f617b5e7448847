//! Configuration System
//!
//! Layered configuration for scans and baselines: built-in defaults, a global
//! config file, a `sentinel.toml` in the working directory, and `SENTINEL__*`
//! environment variables, in increasing precedence. CLI flags are applied on
//! top by the binary.

use crate::ignore::{IgnorePolicy, BUILTIN_IGNORED_NAMES, DEFAULT_BASELINE_NAME};
use crate::logging::LoggingConfig;
use crate::tree::scanner::ScanOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentinelConfig {
    /// Baseline location
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Scan behavior
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Baseline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Baseline file; relative paths resolve against the working directory
    #[serde(default = "default_baseline_path")]
    pub path: PathBuf,
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASELINE_NAME)
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
        }
    }
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File names never scanned (the baseline file name is always added)
    #[serde(default = "default_ignore_names")]
    pub ignore_names: Vec<String>,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum traversal depth (unlimited when unset)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

pub(crate) fn default_ignore_names() -> Vec<String> {
    BUILTIN_IGNORED_NAMES.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_names: default_ignore_names(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

impl ScanConfig {
    /// Ignore policy for a scan whose baseline lives at `baseline_path`.
    pub fn ignore_policy(&self, baseline_path: &Path) -> IgnorePolicy {
        IgnorePolicy::new(self.ignore_names.iter().cloned()).with_baseline(baseline_path)
    }

    /// Scan options for a scan whose baseline lives at `baseline_path`.
    pub fn scan_options(&self, baseline_path: &Path) -> ScanOptions {
        ScanOptions {
            ignore: self.ignore_policy(baseline_path),
            follow_symlinks: self.follow_symlinks,
            max_depth: self.max_depth,
        }
    }

    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        for name in &self.ignore_names {
            if name.trim().is_empty() {
                return Err("Ignore names cannot be empty".to_string());
            }
            if name.contains('/') || name.contains('\\') {
                return Err(format!(
                    "Ignore name '{}' must be a file name, not a path",
                    name
                ));
            }
        }
        if self.max_depth == Some(0) {
            return Err("max_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Baseline(String),
    Scan(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Baseline(msg) => write!(f, "Baseline: {}", msg),
            ValidationError::Scan(msg) => write!(f, "Scan: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SentinelConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.baseline.path.as_os_str().is_empty() {
            errors.push(ValidationError::Baseline(
                "Baseline path cannot be empty".to_string(),
            ));
        } else if self.baseline.path.file_name().is_none() {
            errors.push(ValidationError::Baseline(format!(
                "Baseline path {} has no file name",
                self.baseline.path.display()
            )));
        }

        if let Err(e) = self.scan.validate() {
            errors.push(ValidationError::Scan(e));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
