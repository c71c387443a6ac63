// src/output/mod.rs
// =============================================================================
// Report writers.
//
// Every tool produces one `ReportRow` per page. A `ReportLayout` says how a
// tool names its files, counts and entries, so the three writers (text, CSV,
// JSON) are shared by all tools.
//
// Files are written once the whole batch has run:
//   <stem>.txt   always
//   <stem>.csv   with --csv
//   <stem>.json  with --json
// =============================================================================

mod csv;
mod json;
mod text;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

pub use text::render_console;

use crate::checker::PageLinkReport;
use crate::tools::FoundLinks;

/// Naming used by one tool across all three formats
#[derive(Debug)]
pub struct ReportLayout {
    pub file_stem: &'static str,
    /// Labels of the count lines in the text report
    pub text_counts: &'static [&'static str],
    /// Optional heading printed above the entries on the console
    pub console_heading: Option<&'static str>,
    /// Leading CSV columns: timestamp, URL, then one per count
    pub csv_columns: &'static [&'static str],
    /// CSV entry columns are named "<csv_entry> 1", "<csv_entry> 2", ...
    pub csv_entry: &'static str,
    pub json_counts: &'static [&'static str],
    pub json_entries: &'static str,
}

pub const BROKEN_LINKS: ReportLayout = ReportLayout {
    file_stem: "broken_links_finder",
    text_counts: &["Total links", "Total broken links"],
    console_heading: None,
    csv_columns: &["Timestamp", "Website", "Total Links", "Total Broken Links"],
    csv_entry: "Broken Link",
    json_counts: &["total_links", "total_broken_links"],
    json_entries: "broken_links",
};

pub const PAGES: ReportLayout = ReportLayout {
    file_stem: "page_finder",
    text_counts: &["Number of pages (approximate)"],
    console_heading: Some("List of pages:"),
    csv_columns: &["Timestamp", "URL", "Number of Pages"],
    csv_entry: "Page",
    json_counts: &["number_of_pages"],
    json_entries: "pages",
};

pub const SOCIAL_LINKS: ReportLayout = ReportLayout {
    file_stem: "social_link_extractor",
    text_counts: &["Number of social media links found"],
    console_heading: Some("Social media links:"),
    csv_columns: &["Timestamp", "Website", "Number of Links"],
    csv_entry: "Link",
    json_counts: &["number_of_links"],
    json_entries: "links",
};

/// One page's result, ready to be written in any format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub timestamp: String,
    pub page_url: String,
    pub counts: Vec<usize>,
    pub entries: Vec<String>,
}

impl ReportRow {
    pub fn from_link_report(report: &PageLinkReport) -> Self {
        Self {
            timestamp: now(),
            page_url: report.page_url.clone(),
            counts: vec![report.distinct_link_count(), report.broken_link_count()],
            entries: report.broken_links.clone(),
        }
    }

    pub fn from_found_links(found: &FoundLinks) -> Self {
        Self {
            timestamp: now(),
            page_url: found.page_url.clone(),
            counts: vec![found.links.len()],
            entries: found.links.clone(),
        }
    }
}

fn now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Which formats to write besides the text report
#[derive(Debug, Clone, Copy, Default)]
pub struct Formats {
    pub csv: bool,
    pub json: bool,
}

/// Writes every requested format into `dir` and returns the paths written
pub fn write_reports(
    dir: &Path,
    layout: &ReportLayout,
    rows: &[ReportRow],
    formats: Formats,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let mut written = Vec::new();

    let path = dir.join(format!("{}.txt", layout.file_stem));
    text::write(&path, layout, rows)?;
    written.push(path);

    if formats.csv {
        let path = dir.join(format!("{}.csv", layout.file_stem));
        csv::write(&path, layout, rows)?;
        written.push(path);
    }

    if formats.json {
        let path = dir.join(format!("{}.json", layout.file_stem));
        json::write(&path, layout, rows)?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn sample_rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                timestamp: "2024-03-20 10:00:00".to_string(),
                page_url: "https://one.example".to_string(),
                counts: vec![3, 2],
                entries: vec!["https://one.example/gone".to_string(), "#missing".to_string()],
            },
            ReportRow {
                timestamp: "2024-03-20 10:00:05".to_string(),
                page_url: "https://two.example".to_string(),
                counts: vec![1, 0],
                entries: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_row_from_link_report() {
        let report = PageLinkReport {
            page_url: "https://one.example".to_string(),
            distinct_links: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            broken_links: vec!["b".to_string()],
        };
        let row = ReportRow::from_link_report(&report);
        assert_eq!(row.counts, vec![3, 1]);
        assert_eq!(row.entries, vec!["b"]);
        assert_eq!(row.timestamp.len(), "2024-03-20 10:00:00".len());
    }

    #[test]
    fn test_row_from_found_links() {
        let found = FoundLinks {
            page_url: "https://one.example".to_string(),
            links: vec!["https://github.com/one".to_string()],
        };
        let row = ReportRow::from_found_links(&found);
        assert_eq!(row.counts, vec![1]);
        assert_eq!(row.entries, found.links);
    }

    #[test]
    fn test_write_reports_picks_formats() {
        let dir = tempfile::tempdir().unwrap();
        let rows = sample_rows();

        let written = write_reports(dir.path(), &BROKEN_LINKS, &rows, Formats::default()).unwrap();
        assert_eq!(written, vec![dir.path().join("broken_links_finder.txt")]);

        let written = write_reports(
            dir.path(),
            &BROKEN_LINKS,
            &rows,
            Formats { csv: true, json: true },
        )
        .unwrap();
        assert_eq!(written.len(), 3);
        for path in written {
            assert!(path.exists(), "{} missing", path.display());
        }
    }
}
