//! CLI route: single route table and run context.
//!
//! Each command binding issues exactly one fetch against [`CloudApi`], wraps
//! the result in the resource's renderable view and hands it to the printer.

use crate::cli::command_name;
use crate::cli::parse::{Commands, InstanceCommands, OsCommands, PlanCommands, RegionCommands};
use crate::client::{CloudApi, VultrClient};
use crate::config::CliConfig;
use crate::error::ApiError;
use crate::printer::{ExitStatus, Printer};
use crate::resources::{
    AccountView, InstanceListView, InstanceView, OsListView, PlanListView, RegionListView,
};
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{debug, info};

/// Runtime context for CLI execution: the API client and the runtime that drives it.
pub struct RunContext {
    api: Arc<dyn CloudApi>,
    runtime: Runtime,
}

impl RunContext {
    /// Create a run context talking to the API named in `config`.
    pub fn new(config: &CliConfig) -> Result<Self, ApiError> {
        let client = VultrClient::new(config.base_url.clone(), config.api_key.clone())?;
        Self::with_api(Arc::new(client))
    }

    /// Create a run context around any [`CloudApi`] implementation.
    pub fn with_api(api: Arc<dyn CloudApi>) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::Message(format!("Failed to start async runtime: {}", e)))?;
        Ok(Self { api, runtime })
    }

    /// Execute a CLI command via the single route table.
    pub fn execute<W: Write, E: Write>(
        &self,
        command: &Commands,
        printer: &mut Printer<W, E>,
    ) -> ExitStatus {
        let started = Instant::now();
        let name = command_name(command);
        info!(command = %name, mode = ?printer.mode(), "Executing command");

        let status = self.execute_inner(command, printer);

        debug!(
            command = %name,
            exit_code = status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        status
    }

    fn execute_inner<W: Write, E: Write>(
        &self,
        command: &Commands,
        printer: &mut Printer<W, E>,
    ) -> ExitStatus {
        match command {
            Commands::Account => {
                let result = self.block_on(self.api.get_account());
                printer.emit(result.map(AccountView::new))
            }
            Commands::Os {
                command: OsCommands::List { paging },
            } => {
                let request = paging.request();
                let result = self.block_on(self.api.list_os(&request));
                printer.emit(result.map(|page| OsListView::new(page.items, page.meta)))
            }
            Commands::Regions {
                command: RegionCommands::List { paging },
            } => {
                let request = paging.request();
                let result = self.block_on(self.api.list_regions(&request));
                printer.emit(result.map(|page| RegionListView::new(page.items, page.meta)))
            }
            Commands::Plans {
                command: PlanCommands::List { paging, plan_type },
            } => {
                let request = paging.request();
                let result = self.block_on(self.api.list_plans(&request, plan_type.as_deref()));
                printer.emit(result.map(|page| PlanListView::new(page.items, page.meta)))
            }
            Commands::Instance {
                command: InstanceCommands::List { paging },
            } => {
                let request = paging.request();
                let result = self.block_on(self.api.list_instances(&request));
                printer.emit(result.map(|page| InstanceListView::new(page.items, page.meta)))
            }
            Commands::Instance {
                command: InstanceCommands::Get { id },
            } => {
                let result = self.block_on(self.api.get_instance(id));
                printer.emit(result.map(InstanceView::new))
            }
        }
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
