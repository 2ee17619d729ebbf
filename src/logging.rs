//! Logging System
//!
//! Structured logging with the `tracing` crate. Logs go to stderr or a file and
//! never to stdout, which carries command output. Logging is off unless enabled
//! by `--verbose`, a `--log-*` flag, or the `logging` config section.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive; wins over the configured level.
pub const LOG_FILTER_ENV: &str = "VULTR_LOG";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether a subscriber is installed at all
    #[serde(default)]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stderr,
    File(PathBuf),
}

/// Initialize the logging system
///
/// Does nothing when logging is disabled. Fails if the configuration is
/// invalid or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ApiError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let format = validate_format(&config.format)?;
    let destination = parse_destination(config)?;

    let (writer, ansi) = match &destination {
        Destination::Stderr => (BoxMakeWriter::new(std::io::stderr), config.color),
        Destination::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::ConfigError(format!("Failed to create log directory: {}", e))
                })?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ApiError::ConfigError(format!("Failed to open log file {:?}: {}", path, e))
                })?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let base_subscriber = Registry::default().with(filter);
    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init()
    };

    result.map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)))
}

/// Build the filter from VULTR_LOG, falling back to the configured level and modules
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ApiError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }

    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(&config.level);
    for (module, module_level) in &config.modules {
        let directive = format!("{}={}", module, module_level);
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?,
        );
    }
    Ok(filter)
}

fn validate_format(format: &str) -> Result<&str, ApiError> {
    match format {
        "json" | "text" => Ok(format),
        _ => Err(ApiError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

fn parse_destination(config: &LoggingConfig) -> Result<Destination, ApiError> {
    match config.output.as_str() {
        "stderr" => Ok(Destination::Stderr),
        "file" => config
            .file
            .clone()
            .map(Destination::File)
            .ok_or_else(|| {
                ApiError::ConfigError("Log output 'file' requires a log file path".to_string())
            }),
        other => Err(ApiError::ConfigError(format!(
            "Invalid log output: {} (must be 'stderr' or 'file')",
            other
        ))),
    }
}
