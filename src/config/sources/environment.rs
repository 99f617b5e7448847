//! Environment variable source: SENTINEL_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses SENTINEL_ prefix and __ as separator for nested keys, so
/// `SENTINEL__BASELINE__PATH` sets `baseline.path`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("SENTINEL")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
