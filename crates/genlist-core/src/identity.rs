//! Strict identity policy used when combining departments.
//!
//! Unlike the per-file duplicate check, a full identity match here is the
//! normal case (another department reporting the same gene). Any partial
//! match is fatal: a symbol must carry the same identifier everywhere.

use std::collections::HashMap;

use genlist_model::GeneRecord;

use crate::error::{CombineError, Result};

/// Outcome of looking up a candidate in the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sighting {
    /// First time this gene is seen.
    New,
    /// Gene already known; payload is its slot in the combined list.
    Known(usize),
}

/// Symbol and identifier lookup over the genes combined so far.
#[derive(Debug, Default)]
pub struct GeneIndex {
    by_symbol: HashMap<String, (u32, usize)>,
    by_id: HashMap<u32, String>,
}

impl GeneIndex {
    /// Classifies `candidate` against the genes seen so far.
    ///
    /// # Errors
    ///
    /// [`CombineError::IdentityConflict`] when the symbol is known with a
    /// different identifier, [`CombineError::IdentifierConflict`] when the
    /// identifier is known under a different symbol.
    pub fn check_identity(&self, candidate: &GeneRecord, department: &str) -> Result<Sighting> {
        if let Some(&(existing_id, slot)) = self.by_symbol.get(&candidate.hugo_name) {
            if existing_id == candidate.hgnc_id {
                return Ok(Sighting::Known(slot));
            }
            return Err(CombineError::IdentityConflict {
                gene: candidate.hugo_name.clone(),
                existing_id,
                incoming_id: candidate.hgnc_id,
                department: department.to_string(),
            });
        }
        if let Some(existing_gene) = self.by_id.get(&candidate.hgnc_id) {
            return Err(CombineError::IdentifierConflict {
                hgnc_id: candidate.hgnc_id,
                existing_gene: existing_gene.clone(),
                incoming_gene: candidate.hugo_name.clone(),
                department: department.to_string(),
            });
        }
        Ok(Sighting::New)
    }

    /// Registers a new gene at `slot`.
    pub fn insert(&mut self, record: &GeneRecord, slot: usize) {
        self.by_symbol
            .insert(record.hugo_name.clone(), (record.hgnc_id, slot));
        self.by_id.insert(record.hgnc_id, record.hugo_name.clone());
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use genlist_model::CategoryFields;

    fn gene(name: &str, id: u32) -> GeneRecord {
        GeneRecord {
            hugo_name: name.to_string(),
            hgnc_id: id,
            protocol: false,
            protocol_specification: None,
            date_added: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            notes: None,
            details: CategoryFields::Fusion,
        }
    }

    #[test]
    fn full_match_is_known() {
        let mut index = GeneIndex::default();
        assert_eq!(index.check_identity(&gene("X", 1), "A").unwrap(), Sighting::New);
        index.insert(&gene("X", 1), 0);
        assert_eq!(
            index.check_identity(&gene("X", 1), "B").unwrap(),
            Sighting::Known(0)
        );
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn symbol_with_other_identifier_is_fatal() {
        let mut index = GeneIndex::default();
        index.insert(&gene("X", 1), 0);
        let err = index.check_identity(&gene("X", 2), "B").unwrap_err();
        assert!(matches!(
            err,
            CombineError::IdentityConflict {
                existing_id: 1,
                incoming_id: 2,
                ..
            }
        ));
    }

    #[test]
    fn identifier_with_other_symbol_is_fatal() {
        let mut index = GeneIndex::default();
        index.insert(&gene("X", 1), 0);
        let err = index.check_identity(&gene("Y", 1), "B").unwrap_err();
        assert!(matches!(err, CombineError::IdentifierConflict { hgnc_id: 1, .. }));
    }

    #[test]
    fn unrelated_gene_is_new() {
        let mut index = GeneIndex::default();
        index.insert(&gene("X", 1), 0);
        assert_eq!(index.check_identity(&gene("Y", 2), "B").unwrap(), Sighting::New);
    }
}
