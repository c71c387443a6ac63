// src/output/csv.rs
// =============================================================================
// CSV report: a header row, then one row per page.
//
// Pages have different numbers of entries, so the header gets as many entry
// columns as the longest row ("Broken Link 1" .. "Broken Link N"). Rows are
// already collected when this runs, so N comes from them directly.
//
// The `csv` crate does the quoting. The writer is flexible because rows are
// ragged, and records end in \r\n.
// =============================================================================

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use ::csv::{Terminator, WriterBuilder};

use super::{ReportLayout, ReportRow};

pub(super) fn write(path: &Path, layout: &ReportLayout, rows: &[ReportRow]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, layout, rows).with_context(|| format!("writing {}", path.display()))
}

fn write_rows<W: io::Write>(out: W, layout: &ReportLayout, rows: &[ReportRow]) -> Result<()> {
    let widest = rows.iter().map(|row| row.entries.len()).max().unwrap_or(0);

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    let mut header: Vec<String> = layout.csv_columns.iter().map(|c| c.to_string()).collect();
    header.extend((1..=widest).map(|i| format!("{} {}", layout.csv_entry, i)));
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.timestamp.clone(), row.page_url.clone()];
        record.extend(row.counts.iter().map(|count| count.to_string()));
        record.extend(row.entries.iter().cloned());
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{tests::sample_rows, BROKEN_LINKS, SOCIAL_LINKS};

    fn render(layout: &ReportLayout, rows: &[ReportRow]) -> String {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, layout, rows).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_sized_to_widest_row() {
        let csv = render(&BROKEN_LINKS, &sample_rows());
        let lines: Vec<&str> = csv.split("\r\n").collect();

        assert_eq!(
            lines[0],
            "Timestamp,Website,Total Links,Total Broken Links,Broken Link 1,Broken Link 2"
        );
        assert_eq!(
            lines[1],
            "2024-03-20 10:00:00,https://one.example,3,2,https://one.example/gone,#missing"
        );
        assert_eq!(lines[2], "2024-03-20 10:00:05,https://two.example,1,0");
    }

    #[test]
    fn test_no_rows_gives_header_only() {
        let csv = render(&SOCIAL_LINKS, &[]);
        assert_eq!(csv, "Timestamp,Website,Number of Links\r\n");
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let rows = vec![ReportRow {
            timestamp: "2024-03-20 10:00:00".to_string(),
            page_url: "https://one.example".to_string(),
            counts: vec![2],
            entries: vec!["https://one.example/a,b".to_string(), "say \"hi\"".to_string()],
        }];
        let csv = render(&SOCIAL_LINKS, &rows);
        let lines: Vec<&str> = csv.split("\r\n").collect();

        assert_eq!(
            lines[1],
            "2024-03-20 10:00:00,https://one.example,2,\"https://one.example/a,b\",\"say \"\"hi\"\"\""
        );
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write(&path, &BROKEN_LINKS, &sample_rows()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Timestamp,Website,"));
        assert_eq!(content.lines().count(), 3);
    }
}
