//! Renderable contract
//!
//! Decouples what a resource looks like from how it is displayed. Each resource
//! adapter wraps one domain value (or one page of a collection plus its
//! [`PageMeta`]) and exposes the same capability set: two structured documents,
//! a tabular projection, and optional paging metadata. The [`crate::printer`]
//! picks which capability to use.
//!
//! Tabular projections are grouped in sections keyed by a zero-based index.
//! Most resources use section 0 only; a resource with an embedded sub-list puts
//! it in section 1. For every section, each row carries exactly as many values
//! as the section has headers.

use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Section index → ordered header labels.
pub type Columns = BTreeMap<usize, Vec<String>>;

/// One row of a table, aligned positionally with its section's headers.
pub type Row = Vec<Value>;

/// Section index → rows of that section.
pub type Rows = BTreeMap<usize, Vec<Row>>;

/// Paging metadata attached to every list result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total_count: u64,
    /// Cursor for the following page; empty when this is the last page.
    pub next_cursor: String,
    /// Cursor for the preceding page; empty on the first page.
    #[serde(default)]
    pub prev_cursor: String,
}

impl PageMeta {
    pub fn new(total_count: u64, next_cursor: impl Into<String>) -> Self {
        Self {
            total_count,
            next_cursor: next_cursor.into(),
            prev_cursor: String::new(),
        }
    }

    pub fn has_next(&self) -> bool {
        !self.next_cursor.is_empty()
    }
}

/// Uniform formatting and paging capabilities for one resource result.
///
/// Implementations hold no state beyond the wrapped value and perform no I/O.
pub trait Renderable {
    /// Indented, deterministic JSON of the wrapped value.
    fn to_json(&self) -> Result<Vec<u8>, RenderError>;

    /// YAML carrying the same fields as [`Renderable::to_json`].
    fn to_yaml(&self) -> Result<Vec<u8>, RenderError>;

    fn columns(&self) -> Columns;

    fn rows(&self) -> Rows;

    /// `None` for single records; `Some` for every list result.
    fn paging(&self) -> Option<PageMeta>;
}

/// Serialize `value` as JSON indented with four spaces.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Serialize `value` as a YAML document.
pub fn to_yaml_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, RenderError> {
    Ok(serde_yaml::to_string(value)?.into_bytes())
}

/// Build a single-section header map from string literals.
pub fn single_section(headers: &[&str]) -> Columns {
    let mut columns = Columns::new();
    columns.insert(0, headers.iter().map(|h| h.to_string()).collect());
    columns
}

/// Text shown in a table cell for a row value.
///
/// Strings are shown without quotes, null as empty, and lists in brackets with
/// space-separated elements.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(cell_text).collect();
            format!("[{}]", inner.join(" "))
        }
        Value::Object(_) => value.to_string(),
    }
}

/// Check the header/value arity invariant of a renderable.
///
/// Returns a description of the first mismatch found.
pub fn check_arity(renderable: &dyn Renderable) -> Result<(), String> {
    let columns = renderable.columns();
    let rows = renderable.rows();

    if !columns.keys().eq(rows.keys()) {
        return Err(format!(
            "section mismatch: columns {:?}, rows {:?}",
            columns.keys().collect::<Vec<_>>(),
            rows.keys().collect::<Vec<_>>()
        ));
    }
    for (section, headers) in &columns {
        for (i, row) in rows[section].iter().enumerate() {
            if row.len() != headers.len() {
                return Err(format!(
                    "section {} row {}: {} values for {} headers",
                    section,
                    i,
                    row.len(),
                    headers.len()
                ));
            }
        }
    }
    Ok(())
}
