// src/output/json.rs
// JSON report: one pretty-printed array, one object per page.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};

use super::{ReportLayout, ReportRow};

pub(super) fn write(path: &Path, layout: &ReportLayout, rows: &[ReportRow]) -> Result<()> {
    let objects: Vec<Value> = rows.iter().map(|row| to_object(layout, row)).collect();
    let text = serde_json::to_string_pretty(&objects)?;
    std::fs::write(path, text + "\n").with_context(|| format!("writing {}", path.display()))
}

fn to_object(layout: &ReportLayout, row: &ReportRow) -> Value {
    let mut object = Map::new();
    object.insert("timestamp".to_string(), json!(row.timestamp));
    object.insert("url".to_string(), json!(row.page_url));
    for (key, count) in layout.json_counts.iter().zip(&row.counts) {
        object.insert(key.to_string(), json!(count));
    }
    object.insert(layout.json_entries.to_string(), json!(row.entries));
    Value::Object(object)
}
