//! Resource records and their renderable views.
//!
//! Each submodule defines the records returned by one family of API calls and
//! the adapter that wraps them for the [`crate::printer::Printer`].

pub mod account;
pub mod instance;
pub mod os;
pub mod plan;
pub mod region;

pub use account::{Account, AccountView};
pub use instance::{Instance, InstanceListView, InstanceView};
pub use os::{OsListView, OperatingSystem};
pub use plan::{Plan, PlanListView};
pub use region::{Region, RegionListView};
