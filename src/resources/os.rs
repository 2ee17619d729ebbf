//! Operating systems available for deployment.

use crate::error::RenderError;
use crate::render::{self, single_section, Columns, PageMeta, Renderable, Rows};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingSystem {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default)]
    pub family: String,
}

/// Renderable view of one page of operating systems.
#[derive(Debug, Clone, Serialize)]
pub struct OsListView {
    pub os: Vec<OperatingSystem>,
    pub meta: PageMeta,
}

impl OsListView {
    pub fn new(os: Vec<OperatingSystem>, meta: PageMeta) -> Self {
        Self { os, meta }
    }
}

impl Renderable for OsListView {
    fn to_json(&self) -> Result<Vec<u8>, RenderError> {
        render::to_json_bytes(self)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, RenderError> {
        render::to_yaml_bytes(self)
    }

    fn columns(&self) -> Columns {
        single_section(&["ID", "NAME", "ARCH", "FAMILY"])
    }

    fn rows(&self) -> Rows {
        let mut rows = Rows::new();
        rows.insert(
            0,
            self.os
                .iter()
                .map(|o| vec![json!(o.id), json!(o.name), json!(o.arch), json!(o.family)])
                .collect(),
        );
        rows
    }

    fn paging(&self) -> Option<PageMeta> {
        Some(self.meta.clone())
    }
}
