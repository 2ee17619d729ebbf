//! CLI parse: clap types for vultr-cli. No behavior; definitions only.

use crate::pagination::{PageRequest, DEFAULT_PER_PAGE};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// vultr-cli - Command-line client for the Vultr cloud API
#[derive(Parser, Debug)]
#[command(name = "vultr-cli", version)]
#[command(about = "Command-line client for the Vultr cloud API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (default: ~/.vultr-cli.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: json, yaml, or text (table)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<String>,

    /// API key (overrides VULTR_API_KEY and the config file)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Enable verbose logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve information about your account
    Account,
    /// Operating systems available for deployment
    #[command(visible_alias = "o")]
    Os {
        #[command(subcommand)]
        command: OsCommands,
    },
    /// Datacenter regions
    #[command(visible_alias = "r")]
    Regions {
        #[command(subcommand)]
        command: RegionCommands,
    },
    /// Compute plans
    #[command(visible_alias = "p")]
    Plans {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Compute instances
    #[command(visible_alias = "i")]
    Instance {
        #[command(subcommand)]
        command: InstanceCommands,
    },
}

/// Paging flags shared by every list command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PagingArgs {
    /// (optional) Cursor for paging
    #[arg(short = 'c', long, default_value = "")]
    pub cursor: String,

    /// (optional) Number of items requested per page. Default is 100 and Max is 500
    #[arg(short = 'p', long = "per-page", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

impl PagingArgs {
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.cursor.clone(), self.per_page)
    }
}

#[derive(Subcommand, Debug)]
pub enum OsCommands {
    /// List all available operating systems
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        paging: PagingArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegionCommands {
    /// List all regions
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        paging: PagingArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// List all plans
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        paging: PagingArgs,

        /// (optional) Plan type filter (e.g. vc2, vhf, vdc)
        #[arg(short = 't', long = "type")]
        plan_type: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum InstanceCommands {
    /// List all instances
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Show one instance
    Get {
        /// Instance ID
        id: String,
    },
}
