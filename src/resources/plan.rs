//! Compute plans.

use crate::error::RenderError;
use crate::render::{self, single_section, Columns, PageMeta, Renderable, Rows};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    #[serde(default)]
    pub vcpu_count: i64,
    /// Memory in MB.
    #[serde(default)]
    pub ram: i64,
    /// Disk size in GB.
    #[serde(default)]
    pub disk: i64,
    #[serde(default)]
    pub disk_count: i64,
    /// Monthly bandwidth in GB.
    #[serde(default)]
    pub bandwidth: i64,
    #[serde(default)]
    pub monthly_cost: f64,
    #[serde(default, rename = "type")]
    pub plan_type: String,
    #[serde(default)]
    pub locations: Vec<String>,
}

/// Renderable view of one page of plans.
#[derive(Debug, Clone, Serialize)]
pub struct PlanListView {
    pub plans: Vec<Plan>,
    pub meta: PageMeta,
}

impl PlanListView {
    pub fn new(plans: Vec<Plan>, meta: PageMeta) -> Self {
        Self { plans, meta }
    }
}

impl Renderable for PlanListView {
    fn to_json(&self) -> Result<Vec<u8>, RenderError> {
        render::to_json_bytes(self)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, RenderError> {
        render::to_yaml_bytes(self)
    }

    fn columns(&self) -> Columns {
        single_section(&[
            "ID",
            "VCPU COUNT",
            "RAM",
            "DISK",
            "DISK COUNT",
            "BANDWIDTH GB",
            "PRICE PER MONTH",
            "TYPE",
            "LOCATIONS",
        ])
    }

    fn rows(&self) -> Rows {
        let mut rows = Rows::new();
        rows.insert(
            0,
            self.plans
                .iter()
                .map(|p| {
                    vec![
                        json!(p.id),
                        json!(p.vcpu_count),
                        json!(p.ram),
                        json!(p.disk),
                        json!(p.disk_count),
                        json!(p.bandwidth),
                        json!(p.monthly_cost),
                        json!(p.plan_type),
                        json!(p.locations),
                    ]
                })
                .collect(),
        );
        rows
    }

    fn paging(&self) -> Option<PageMeta> {
        Some(self.meta.clone())
    }
}
