//! Gene list assembly.
//!
//! Folds department gene lists into one master list per category, either as
//! a flat deduplicated list or as a combined list that records which
//! departments reported each gene.

pub mod assemble;
pub mod error;
pub mod identity;
pub mod output;
pub mod reconcile;
pub mod run;

pub use assemble::{
    CombinedList, ListStats, MasterList, SkippedRow, build_combined_list, build_master_list,
};
pub use error::{CombineError, Result};
pub use identity::{GeneIndex, Sighting};
pub use output::{GeneTable, write_table};
pub use reconcile::{CombinedRecord, sort_combined};
pub use run::{
    CategoryFailure, CategoryOutcome, DEFAULT_COMBINED_FILE, DEFAULT_MASTER_FILE, ListMode,
    RunOptions, RunReport, run, run_category,
};
