//! Cross-department reconciliation of records sharing an identity.
//!
//! A combined record starts from the first row seen for a gene and absorbs
//! every later row for the same gene:
//!
//! - `departments` grows as a set;
//! - `date_added` becomes the most recent date;
//! - `notes` and `protocol_specification` are appended, each fragment tagged
//!   with its department, and never overwritten;
//! - category flags are OR-ed;
//! - other category fields keep their first value.
//!
//! Text output depends on the order rows are folded in; callers feed rows in
//! discovery order.

use std::collections::BTreeSet;

use genlist_model::{CategoryFields, GeneKey, GeneRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CombinedRecord {
    #[serde(flatten)]
    pub record: GeneRecord,
    pub departments: BTreeSet<String>,
    /// Departments scanned for the category, fixed per run.
    pub total: usize,
}

impl CombinedRecord {
    /// Creates the combined record from the first row reported for a gene.
    ///
    /// Only the department-tagged text fields are rewritten; everything else
    /// is taken over as is.
    pub fn seed(first: GeneRecord, department: &str, total: usize) -> Self {
        let mut record = first;
        record.notes = record.notes.map(|notes| tag(department, &notes));
        record.protocol_specification = record
            .protocol_specification
            .map(|spec| tag(department, &spec));
        Self {
            record,
            departments: BTreeSet::from([department.to_string()]),
            total,
        }
    }

    /// Folds a later row for the same gene into this record.
    pub fn add_info(&mut self, incoming: &GeneRecord, department: &str) {
        debug_assert_eq!(self.record.key(), incoming.key());
        self.departments.insert(department.to_string());

        let record = &mut self.record;
        record.date_added = record.date_added.max(incoming.date_added);
        append_tagged(&mut record.notes, incoming.notes.as_deref(), department);
        append_tagged(
            &mut record.protocol_specification,
            incoming.protocol_specification.as_deref(),
            department,
        );
        merge_flags(&mut record.details, &incoming.details);
    }

    pub fn key(&self) -> GeneKey {
        self.record.key()
    }

    /// `count/total` display ratio.
    pub fn seen_in(&self) -> String {
        format!("{}/{}", self.departments.len(), self.total)
    }

    /// Row values: record fields, sorted departments, seen-in ratio.
    pub fn to_values(&self) -> Vec<String> {
        let mut values = self.record.to_values();
        values.push(
            self.departments
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(";"),
        );
        values.push(self.seen_in());
        values
    }
}

fn tag(department: &str, text: &str) -> String {
    format!("{department}: {text}")
}

fn append_tagged(target: &mut Option<String>, incoming: Option<&str>, department: &str) {
    let Some(text) = incoming else {
        return;
    };
    match target {
        Some(existing) => {
            existing.push_str("; ");
            existing.push_str(&tag(department, text));
        }
        None => *target = Some(tag(department, text)),
    }
}

/// ORs boolean category fields. Non-boolean fields keep the first value.
fn merge_flags(current: &mut CategoryFields, incoming: &CategoryFields) {
    if let (
        CategoryFields::Germline { treatment_relevant },
        CategoryFields::Germline {
            treatment_relevant: other,
        },
    ) = (current, incoming)
    {
        *treatment_relevant |= *other;
    }
}

/// Sorts by number of reporting departments (most first), then symbol.
pub fn sort_combined(records: &mut [CombinedRecord]) {
    records.sort_by(|a, b| {
        b.departments
            .len()
            .cmp(&a.departments.len())
            .then_with(|| a.record.hugo_name.cmp(&b.record.hugo_name))
    });
}
