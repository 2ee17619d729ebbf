//! vultr-cli: command-line client for the Vultr cloud API
//!
//! Resource commands fetch one record or one page of records and hand a
//! renderable view of the result to a printer, which writes JSON, YAML or an
//! aligned table. List commands page with an explicit cursor.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod printer;
pub mod render;
pub mod resources;
