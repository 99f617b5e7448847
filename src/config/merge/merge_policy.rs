//! Merge rules: defaults, override order, conflict handling.

use crate::ignore::DEFAULT_BASELINE_NAME;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources replace arrays wholesale; `scan.ignore_names` from a file or
/// the environment is never merged with the built-in list.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("baseline.path", DEFAULT_BASELINE_NAME)?
        .set_default("scan.follow_symlinks", false)?
        .set_default("scan.ignore_names", crate::config::default_ignore_names())
}
