//! Datacenter regions.

use crate::error::RenderError;
use crate::render::{self, single_section, Columns, PageMeta, Renderable, Rows};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Renderable view of one page of regions.
#[derive(Debug, Clone, Serialize)]
pub struct RegionListView {
    pub regions: Vec<Region>,
    pub meta: PageMeta,
}

impl RegionListView {
    pub fn new(regions: Vec<Region>, meta: PageMeta) -> Self {
        Self { regions, meta }
    }
}

impl Renderable for RegionListView {
    fn to_json(&self) -> Result<Vec<u8>, RenderError> {
        render::to_json_bytes(self)
    }

    fn to_yaml(&self) -> Result<Vec<u8>, RenderError> {
        render::to_yaml_bytes(self)
    }

    fn columns(&self) -> Columns {
        single_section(&["ID", "CITY", "COUNTRY", "CONTINENT", "OPTIONS"])
    }

    fn rows(&self) -> Rows {
        let mut rows = Rows::new();
        rows.insert(
            0,
            self.regions
                .iter()
                .map(|r| {
                    vec![
                        json!(r.id),
                        json!(r.city),
                        json!(r.country),
                        json!(r.continent),
                        json!(r.options),
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
