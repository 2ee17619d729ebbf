//! Environment source: VULTR_API_KEY, VULTR_OUTPUT, VULTR_BASE_URL,
//! VULTR_LOGGING__LEVEL and friends.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "VULTR";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}
