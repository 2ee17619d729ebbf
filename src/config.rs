//! Configuration System
//!
//! Layered configuration for the CLI: built-in defaults, then a YAML config
//! file, then `VULTR_*` environment variables, then command-line flags.
//! The `output` key selects the output mode for the whole invocation.

use crate::client::DEFAULT_BASE_URL;
use crate::logging::LoggingConfig;
use crate::printer::OutputMode;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: Option<String>,

    /// `api-key` spelling of the key used by config files; folded into
    /// `api_key` by [`CliConfig::normalize`].
    #[serde(default, rename = "api-key", skip_serializing)]
    file_api_key: Option<String>,

    /// Output format: json, yaml, or anything else for a table
    #[serde(default)]
    pub output: Option<String>,

    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            file_api_key: None,
            output: None,
            base_url: default_base_url(),
            logging: LoggingConfig::default(),
        }
    }
}

impl CliConfig {
    /// Output mode selected by the `output` key.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_config(self.output.as_deref())
    }

    /// Fold the `api-key` spelling into `api_key`. `api_key` wins when both are set,
    /// which lets `VULTR_API_KEY` override a config file.
    pub fn normalize(mut self) -> Self {
        if let Some(key) = self.file_api_key.take() {
            if self.api_key.is_none() {
                self.api_key = Some(key);
            }
        }
        self
    }

    /// Apply command-line flags; a flag that was given wins over every other source.
    pub fn apply_overrides(&mut self, api_key: Option<&str>, output: Option<&str>) {
        if let Some(key) = api_key {
            self.api_key = Some(key.to_string());
        }
        if let Some(out) = output {
            self.output = Some(out.to_string());
        }
    }
}
