//! Validation findings grouped as file → row → field.

use std::path::PathBuf;

use genlist_model::{Category, GeneRecord};
use serde::Serialize;

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    /// Raw offending value (empty when the field was missing).
    pub value: String,
    pub cause: String,
}

impl FieldIssue {
    pub fn new(field: &str, value: &str, cause: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            cause: cause.into(),
        }
    }
}

/// Why a row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowProblem {
    /// One or more field rules failed.
    Invalid { issues: Vec<FieldIssue> },
    /// Symbol or identifier already used by an earlier row of the same file.
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowReport {
    pub line: u64,
    /// The row as read from the file.
    pub text: String,
    pub problem: RowProblem,
}

/// Validation outcome of one department file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub category: Category,
    pub department: String,
    pub path: PathBuf,
    pub total_rows: usize,
    /// Rows that passed validation and duplicate checks, in file order.
    #[serde(skip)]
    pub accepted: Vec<GeneRecord>,
    pub problems: Vec<RowReport>,
}

impl FileReport {
    pub fn has_problems(&self) -> bool {
        !self.problems.is_empty()
    }

    pub fn invalid_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|row| matches!(row.problem, RowProblem::Invalid { .. }))
            .count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.problems
            .iter()
            .filter(|row| row.problem == RowProblem::Duplicate)
            .count()
    }
}
