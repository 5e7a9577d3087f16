//! File-level validation: every row of a department file is checked, bad
//! rows are collected and processing carries on.

use std::path::Path;

use genlist_ingest::{CategorySource, read_rows};
use genlist_model::Category;
use tracing::{debug, info_span, warn};

use crate::duplicates::is_partial_duplicate;
use crate::issue::{FileReport, RowProblem, RowReport};
use crate::validator::validate_row;

/// Validates one department file.
///
/// # Errors
///
/// Fails only when the file cannot be read; row problems end up in the
/// returned report.
pub fn validate_file(
    category: Category,
    department: &str,
    path: &Path,
) -> genlist_ingest::Result<FileReport> {
    let span = info_span!("validate_file", category = %category, department, path = %path.display());
    let _guard = span.enter();

    let table = read_rows(path)?;
    let mut accepted = Vec::new();
    let mut problems = Vec::new();

    for row in &table.rows {
        let problem = match validate_row(category, row) {
            Ok(record) => {
                if is_partial_duplicate(&accepted, &record) {
                    RowProblem::Duplicate
                } else {
                    accepted.push(record);
                    continue;
                }
            }
            Err(issues) => RowProblem::Invalid { issues },
        };
        warn!(line = row.line, problem = ?problem, "skipping row");
        problems.push(RowReport {
            line: row.line,
            text: row.text.clone(),
            problem,
        });
    }

    debug!(
        rows = table.rows.len(),
        accepted = accepted.len(),
        problems = problems.len(),
        "validated file"
    );
    Ok(FileReport {
        category,
        department: department.to_string(),
        path: path.to_path_buf(),
        total_rows: table.rows.len(),
        accepted,
        problems,
    })
}

/// Validates every file of every department, in discovery order.
pub fn validate_category(source: &CategorySource) -> genlist_ingest::Result<Vec<FileReport>> {
    source
        .files()
        .map(|(department, path)| validate_file(source.category, department, path))
        .collect()
}
