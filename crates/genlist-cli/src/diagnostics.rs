//! Markdown-flavoured diagnostics for rows that were rejected.
//!
//! The output is meant to be pasted back to the department that owns the
//! file, so it quotes each problem row verbatim.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use genlist_core::SkippedRow;
use genlist_validate::{FileReport, RowProblem, RowReport};

/// Renders the problems of one file. Returns an empty string for clean files.
pub fn render_file_report(report: &FileReport) -> String {
    render_rows(&report.path, report.problems.iter())
}

/// Renders skipped rows of a list run, grouped per file in first-seen order.
pub fn render_skipped(skipped: &[SkippedRow]) -> String {
    let mut order: Vec<&Path> = Vec::new();
    let mut by_path: BTreeMap<&Path, Vec<&RowReport>> = BTreeMap::new();
    for entry in skipped {
        let rows = by_path.entry(entry.path.as_path()).or_insert_with(|| {
            order.push(entry.path.as_path());
            Vec::new()
        });
        rows.push(&entry.row);
    }

    let mut out = String::new();
    for path in order {
        if let Some(rows) = by_path.get(path) {
            out.push_str(&render_rows(path, rows.iter().copied()));
        }
    }
    out
}

fn render_rows<'a>(path: &Path, rows: impl Iterator<Item = &'a RowReport>) -> String {
    let mut out = String::new();
    for (index, row) in rows.enumerate() {
        if index == 0 {
            let _ = writeln!(out, "**{}**", path.display());
        }
        let _ = writeln!(out, "Something is wrong with the row:");
        let _ = writeln!(out, "**{}**", row.text);
        match &row.problem {
            RowProblem::Invalid { issues } => {
                for issue in issues {
                    let _ = writeln!(out, "* **{}**: {}", issue.field, issue.cause);
                }
            }
            RowProblem::Duplicate => {
                let _ = writeln!(out, "The row is a duplicate");
            }
        }
        out.push('\n');
    }
    out
}
