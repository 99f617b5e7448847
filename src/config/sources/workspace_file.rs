//! Workspace config file source: sentinel.toml in the working directory

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// File name of the per-directory configuration file.
pub const WORKSPACE_CONFIG_FILE: &str = "sentinel.toml";

/// Add the working directory's config file to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    working_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let config_path = working_dir.join(WORKSPACE_CONFIG_FILE);
    if config_path.is_file() {
        builder = builder.add_source(File::from(config_path.as_path()).required(false));
    }

    Ok(builder)
}
