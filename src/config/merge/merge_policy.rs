//! Merge rules: defaults and override order.
//!
//! Sources added later override earlier ones: defaults, config file,
//! environment. Command-line flags are applied on the deserialized config.

use crate::client::DEFAULT_BASE_URL;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("logging.enabled", false)?
        .set_default("logging.output", "stderr")
}
