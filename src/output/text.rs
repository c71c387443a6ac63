// src/output/text.rs
// Plain text report: one block per page, separated by a blank line.

use std::path::Path;

use anyhow::{Context, Result};

use super::{ReportLayout, ReportRow};

/// Renders one page's block
///
///   Timestamp: 2024-03-20 10:00:00
///   URL: https://example.com
///   Total links: 12
///   Total broken links: 1
///   https://example.com/gone
pub fn render_text(layout: &ReportLayout, row: &ReportRow) -> String {
    let mut lines = header(layout, row);
    lines.extend(row.entries.iter().cloned());
    to_block(&lines)
}

/// Same block for the terminal, with the layout's heading (if any) and a
/// blank line before the entries
pub fn render_console(layout: &ReportLayout, row: &ReportRow) -> String {
    let mut lines = header(layout, row);
    if !row.entries.is_empty() {
        lines.push(String::new());
        if let Some(heading) = layout.console_heading {
            lines.push(heading.to_string());
        }
        lines.extend(row.entries.iter().cloned());
    }
    to_block(&lines)
}

fn header(layout: &ReportLayout, row: &ReportRow) -> Vec<String> {
    let mut lines = vec![
        format!("Timestamp: {}", row.timestamp),
        format!("URL: {}", row.page_url),
    ];
    lines.extend(
        layout
            .text_counts
            .iter()
            .zip(&row.counts)
            .map(|(label, count)| format!("{}: {}", label, count)),
    );
    lines
}

// Every line, including the last, ends in a newline
fn to_block(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

pub(super) fn write(path: &Path, layout: &ReportLayout, rows: &[ReportRow]) -> Result<()> {
    let blocks: Vec<String> = rows.iter().map(|row| render_text(layout, row)).collect();
    std::fs::write(path, blocks.join("\n"))
        .with_context(|| format!("writing {}", path.display()))
}
