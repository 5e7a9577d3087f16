//! Master-list assembly for one category.
//!
//! Two flavours share the same discovery input:
//!
//! - the flat master list keeps the first accepted row per identity, after
//!   per-file validation and duplicate checks;
//! - the combined list folds every department's row for a gene into one
//!   [`CombinedRecord`] and aborts on identity conflicts.

use std::collections::HashSet;
use std::path::PathBuf;

use genlist_ingest::{CategorySource, read_rows};
use genlist_model::{Category, GeneKey, GeneRecord, HeaderLayout};
use genlist_validate::{RowProblem, RowReport, validate_file, validate_row};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::identity::{GeneIndex, Sighting};
use crate::output::GeneTable;
use crate::reconcile::{CombinedRecord, sort_combined};

/// A row left out of a list.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    pub department: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub row: RowReport,
}

/// Counters gathered while assembling a list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListStats {
    pub departments: usize,
    pub files: usize,
    pub rows: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ListStats {
    fn from_source(source: &CategorySource) -> Self {
        Self {
            departments: source.total_departments(),
            files: source.file_count(),
            ..Self::default()
        }
    }

    fn skip(&mut self, department: &str, path: PathBuf, row: RowReport) {
        self.skipped.push(SkippedRow {
            department: department.to_string(),
            path,
            row,
        });
    }
}

/// Flat, deduplicated list sorted by symbol.
#[derive(Debug, Clone)]
pub struct MasterList {
    pub category: Category,
    pub records: Vec<GeneRecord>,
    pub stats: ListStats,
}

impl GeneTable for MasterList {
    fn header(&self) -> Vec<&'static str> {
        self.category.schema().header(HeaderLayout::Flat)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(GeneRecord::to_values).collect()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Cross-department list with provenance, sorted by reach then symbol.
#[derive(Debug, Clone)]
pub struct CombinedList {
    pub category: Category,
    pub records: Vec<CombinedRecord>,
    pub stats: ListStats,
}

impl GeneTable for CombinedList {
    fn header(&self) -> Vec<&'static str> {
        self.category.schema().header(HeaderLayout::Combined)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(CombinedRecord::to_values).collect()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Builds the flat master list of a category.
///
/// Invalid rows and rows colliding within their own file are skipped and
/// recorded in the stats. Across files the first row per identity wins.
pub fn build_master_list(source: &CategorySource) -> Result<MasterList> {
    let span = info_span!("master_list", category = %source.category);
    let _guard = span.enter();

    let mut stats = ListStats::from_source(source);
    let mut seen: HashSet<GeneKey> = HashSet::new();
    let mut records = Vec::new();

    for (department, path) in source.files() {
        let report = validate_file(source.category, department, path)?;
        stats.rows += report.total_rows;
        for problem in report.problems {
            stats.skip(department, report.path.clone(), problem);
        }
        for record in report.accepted {
            if seen.insert(record.key()) {
                records.push(record);
            } else {
                debug!(gene = %record.key(), department, "already listed by an earlier department");
            }
        }
    }

    records.sort_by(|a, b| {
        a.hugo_name
            .cmp(&b.hugo_name)
            .then_with(|| a.hgnc_id.cmp(&b.hgnc_id))
    });
    info!(
        records = records.len(),
        skipped = stats.skipped.len(),
        "assembled master list"
    );
    Ok(MasterList {
        category: source.category,
        records,
        stats,
    })
}

/// Builds the combined list of a category.
///
/// # Errors
///
/// Fails on unreadable files and on the first cross-department identity
/// conflict; in both cases nothing is returned for the category.
pub fn build_combined_list(source: &CategorySource) -> Result<CombinedList> {
    let span = info_span!("combined_list", category = %source.category);
    let _guard = span.enter();

    let category = source.category;
    let total = source.total_departments();
    let mut stats = ListStats::from_source(source);
    let mut index = GeneIndex::default();
    let mut genes: Vec<CombinedRecord> = Vec::new();

    for (department, path) in source.files() {
        let table = read_rows(path)?;
        stats.rows += table.rows.len();
        for row in &table.rows {
            let record = match validate_row(category, row) {
                Ok(record) => record,
                Err(issues) => {
                    warn!(department, line = row.line, "skipping invalid row");
                    let report = RowReport {
                        line: row.line,
                        text: row.text.clone(),
                        problem: RowProblem::Invalid { issues },
                    };
                    stats.skip(department, path.to_path_buf(), report);
                    continue;
                }
            };

            match index.check_identity(&record, department) {
                Ok(Sighting::Known(slot)) => genes[slot].add_info(&record, department),
                Ok(Sighting::New) => {
                    index.insert(&record, genes.len());
                    genes.push(CombinedRecord::seed(record, department, total));
                }
                Err(error) => {
                    warn!(department, %error, "identity conflict, aborting category");
                    return Err(error);
                }
            }
        }
    }

    sort_combined(&mut genes);
    info!(
        records = genes.len(),
        departments = total,
        skipped = stats.skipped.len(),
        "assembled combined list"
    );
    Ok(CombinedList {
        category,
        records: genes,
        stats,
    })
}
