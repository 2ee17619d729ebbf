//! Command-name contract for logging (e.g. "account", "os.list").

use crate::cli::parse::{Commands, InstanceCommands, OsCommands, PlanCommands, RegionCommands};

pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Account => "account".to_string(),
        Commands::Os { command } => format!("os.{}", os_command_name(command)),
        Commands::Regions { command } => format!("regions.{}", region_command_name(command)),
        Commands::Plans { command } => format!("plans.{}", plan_command_name(command)),
        Commands::Instance { command } => {
            format!("instance.{}", instance_command_name(command))
        }
    }
}

pub fn os_command_name(command: &OsCommands) -> &'static str {
    match command {
        OsCommands::List { .. } => "list",
    }
}

pub fn region_command_name(command: &RegionCommands) -> &'static str {
    match command {
        RegionCommands::List { .. } => "list",
    }
}

pub fn plan_command_name(command: &PlanCommands) -> &'static str {
    match command {
        PlanCommands::List { .. } => "list",
    }
}

pub fn instance_command_name(command: &InstanceCommands) -> &'static str {
    match command {
        InstanceCommands::List { .. } => "list",
        InstanceCommands::Get { .. } => "get",
    }
}
