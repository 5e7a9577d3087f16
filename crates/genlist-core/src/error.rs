//! Error types for list assembly.

use std::path::PathBuf;

use genlist_ingest::IngestError;
use thiserror::Error;

/// Errors that abort the assembly of one category.
#[derive(Debug, Error)]
pub enum CombineError {
    /// The same symbol was reported with two identifiers.
    #[error(
        "Gene \"{gene}\" with HGNC_ID \"{incoming_id}\" (department {department}) is in another \
         department with HGNC_ID \"{existing_id}\". This is not allowed."
    )]
    IdentityConflict {
        gene: String,
        existing_id: u32,
        incoming_id: u32,
        department: String,
    },

    /// The same identifier was reported under two symbols.
    #[error(
        "HGNC_ID \"{hgnc_id}\" is used for gene \"{incoming_gene}\" (department {department}) \
         but already belongs to gene \"{existing_gene}\". This is not allowed."
    )]
    IdentifierConflict {
        hgnc_id: u32,
        existing_gene: String,
        incoming_gene: String,
        department: String,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Failed to write the output table.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl CombineError {
    /// True for cross-department integrity violations (as opposed to I/O).
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            CombineError::IdentityConflict { .. } | CombineError::IdentifierConflict { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CombineError>;
