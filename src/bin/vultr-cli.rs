//! vultr-cli Binary
//!
//! Command-line interface for the Vultr cloud API.

use clap::Parser;
use std::process;
use tracing::{error, info};
use vultr_cli::cli::{map_error, Cli, RunContext};
use vultr_cli::config::{CliConfig, ConfigLoader};
use vultr_cli::logging::{init_logging, LoggingConfig};
use vultr_cli::printer::Printer;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("vultr-cli starting");

    let context = match RunContext::new(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing client: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let mut printer = Printer::stdio(config.output_mode());
    let status = context.execute(&cli.command, &mut printer);
    process::exit(status.code());
}

/// Load configuration and apply command-line flags on top.
/// Precedence: CLI flags override environment override config file override defaults.
fn load_config(cli: &Cli) -> Result<CliConfig, vultr_cli::error::ApiError> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    config.apply_overrides(cli.api_key.as_deref(), cli.output.as_deref());
    Ok(config)
}

/// Build logging configuration from CLI args and the loaded config.
/// Any logging flag turns logging on; an explicit flag wins over --verbose.
fn build_logging_config(cli: &Cli, config: &CliConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.enabled = true;
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.enabled = true;
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.enabled = true;
        logging.file = Some(file.clone());
        if cli.log_output.is_none() {
            logging.output = "file".to_string();
        }
    }

    logging
}
