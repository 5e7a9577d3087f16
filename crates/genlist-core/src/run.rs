//! Batch runs over every selected category.
//!
//! Categories are independent: a failing category is recorded and the run
//! moves on to the next one.

use std::path::{Path, PathBuf};

use genlist_ingest::discover_category;
use genlist_model::Category;
use serde::Serialize;
use tracing::{error, info, info_span};

use crate::assemble::{ListStats, build_combined_list, build_master_list};
use crate::error::{CombineError, Result};
use crate::output::{GeneTable, write_table};

pub const DEFAULT_MASTER_FILE: &str = "master.csv";
pub const DEFAULT_COMBINED_FILE: &str = "combined.csv";

/// Which list to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Flat deduplicated list (first row per identity wins).
    Master,
    /// Cross-department list with provenance.
    Combined,
}

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory holding one sub-directory per category.
    pub root: PathBuf,
    /// Categories to process, in order.
    pub categories: Vec<Category>,
    pub master_file_name: String,
    pub combined_file_name: String,
}

impl RunOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            categories: Category::ALL.to_vec(),
            master_file_name: DEFAULT_MASTER_FILE.to_string(),
            combined_file_name: DEFAULT_COMBINED_FILE.to_string(),
        }
    }

    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        if !categories.is_empty() {
            self.categories = categories;
        }
        self
    }

    #[must_use]
    pub fn with_output_name(mut self, mode: ListMode, name: impl Into<String>) -> Self {
        match mode {
            ListMode::Master => self.master_file_name = name.into(),
            ListMode::Combined => self.combined_file_name = name.into(),
        }
        self
    }

    /// Output path of `category` for `mode`.
    pub fn output_path(&self, category: Category, mode: ListMode) -> PathBuf {
        let name = match mode {
            ListMode::Master => &self.master_file_name,
            ListMode::Combined => &self.combined_file_name,
        };
        self.root.join(category.as_str()).join(name)
    }
}

/// Result of one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutcome {
    pub category: Category,
    pub mode: ListMode,
    pub records: usize,
    pub stats: ListStats,
    /// Written file, `None` when the list was empty.
    pub output: Option<PathBuf>,
}

/// A category whose run was aborted.
#[derive(Debug)]
pub struct CategoryFailure {
    pub category: Category,
    pub error: CombineError,
}

/// Results of a batch run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<CategoryOutcome>,
    pub failures: Vec<CategoryFailure>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Runs `mode` for every selected category. Missing category directories are
/// skipped.
pub fn run(options: &RunOptions, mode: ListMode) -> RunReport {
    let mut report = RunReport::default();
    for &category in &options.categories {
        match run_category(options, category, mode) {
            Ok(Some(outcome)) => report.outcomes.push(outcome),
            Ok(None) => {}
            Err(err) => {
                error!(category = %category, error = %err, "category failed");
                report.failures.push(CategoryFailure {
                    category,
                    error: err,
                });
            }
        }
    }
    report
}

/// Builds and writes the list of one category.
///
/// Returns `Ok(None)` when the category directory does not exist.
pub fn run_category(
    options: &RunOptions,
    category: Category,
    mode: ListMode,
) -> Result<Option<CategoryOutcome>> {
    let span = info_span!("category", category = %category, mode = ?mode);
    let _guard = span.enter();

    let Some(source) = discover_category(&options.root, category)? else {
        return Ok(None);
    };
    info!(
        departments = source.total_departments(),
        files = source.file_count(),
        "processing category"
    );

    let path = options.output_path(category, mode);
    let outcome = match mode {
        ListMode::Master => {
            let list = build_master_list(&source)?;
            finish(category, mode, &list, list.records.len(), list.stats.clone(), &path)?
        }
        ListMode::Combined => {
            let list = build_combined_list(&source)?;
            finish(category, mode, &list, list.records.len(), list.stats.clone(), &path)?
        }
    };
    Ok(Some(outcome))
}

fn finish(
    category: Category,
    mode: ListMode,
    table: &impl GeneTable,
    records: usize,
    stats: ListStats,
    path: &Path,
) -> Result<CategoryOutcome> {
    let written = write_table(table, path)?;
    Ok(CategoryOutcome {
        category,
        mode,
        records,
        stats,
        output: written.then(|| path.to_path_buf()),
    })
}
