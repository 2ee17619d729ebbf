//! Global config file source: ~/.vultr-cli.yaml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::{File, FileFormat};
use directories::BaseDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".vultr-cli.yaml"))
}

/// Add the global config file source to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(path) = global_config_path() {
        if path.exists() {
            debug!(config_path = %path.display(), "Loading global config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(false));
        } else {
            debug!(config_path = %path.display(), "No global config file");
        }
    }
    Ok(builder)
}
