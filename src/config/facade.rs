//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::SentinelConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources, with `working_dir` providing
    /// the workspace file.
    pub fn load(working_dir: &Path) -> Result<SentinelConfig, ConfigError> {
        MergeService::load(working_dir)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<SentinelConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> SentinelConfig {
        SentinelConfig::default()
    }
}
