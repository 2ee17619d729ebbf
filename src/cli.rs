//! CLI domain: parse, route, help and output only.
//! Command bindings live in the route table; rendering lives in the printer.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{
    Cli, Commands, InstanceCommands, OsCommands, PagingArgs, PlanCommands, RegionCommands,
};
pub use route::RunContext;
