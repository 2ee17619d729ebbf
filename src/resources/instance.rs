//! Compute instances.

use crate::error::RenderError;
use crate::render::{self, single_section, Columns, PageMeta, Renderable, Rows};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub os_id: i64,
    /// Memory in MB.
    #[serde(default)]
    pub ram: i64,
    /// Disk size in GB.
    #[serde(default)]
    pub disk: i64,
    #[serde(default)]
    pub main_ip: String,
    #[serde(default)]
    pub vcpu_count: i64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub date_created: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub power_status: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Renderable view of a single instance.
///
/// Section 0 holds the instance fields; section 1 lists its tags, one per row.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceView {
    pub instance: Instance,
}

impl InstanceView {
    pub fn new(instance: Instance) -> Self {
        Self { instance }
    }
}

impl Renderable for InstanceView {
    fn to_json(&self) -> Result<Vec<u8>, RenderError> {
        render::to_json_bytes(self)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, RenderError> {
        render::to_yaml_bytes(self)
    }

    fn columns(&self) -> Columns {
        let mut columns = single_section(&[
            "ID",
            "LABEL",
            "OS",
            "RAM",
            "DISK",
            "MAIN IP",
            "VCPU COUNT",
            "REGION",
            "PLAN",
            "DATE CREATED",
            "STATUS",
            "POWER STATUS",
        ]);
        columns.insert(1, vec!["TAGS".to_string()]);
        columns
    }

    fn rows(&self) -> Rows {
        let i = &self.instance;
        let mut rows = Rows::new();
        rows.insert(
            0,
            vec![vec![
                json!(i.id),
                json!(i.label),
                json!(i.os),
                json!(i.ram),
                json!(i.disk),
                json!(i.main_ip),
                json!(i.vcpu_count),
                json!(i.region),
                json!(i.plan),
                json!(i.date_created),
                json!(i.status),
                json!(i.power_status),
            ]],
        );
        rows.insert(1, i.tags.iter().map(|t| vec![json!(t)]).collect());
        rows
    }

    fn paging(&self) -> Option<PageMeta> {
        None
    }
}

/// Renderable view of one page of instances.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceListView {
    pub instances: Vec<Instance>,
    pub meta: PageMeta,
}

impl InstanceListView {
    pub fn new(instances: Vec<Instance>, meta: PageMeta) -> Self {
        Self { instances, meta }
    }
}

impl Renderable for InstanceListView {
    fn to_json(&self) -> Result<Vec<u8>, RenderError> {
        render::to_json_bytes(self)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, RenderError> {
        render::to_yaml_bytes(self)
    }

    fn columns(&self) -> Columns {
        single_section(&[
            "ID", "IP", "LABEL", "OS", "STATUS", "REGION", "CPU", "RAM", "DISK",
        ])
    }

    fn rows(&self) -> Rows {
        let mut rows = Rows::new();
        rows.insert(
            0,
            self.instances
                .iter()
                .map(|i| {
                    vec![
                        json!(i.id),
                        json!(i.main_ip),
                        json!(i.label),
                        json!(i.os),
                        json!(i.status),
                        json!(i.region),
                        json!(i.vcpu_count),
                        json!(i.ram),
                        json!(i.disk),
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
