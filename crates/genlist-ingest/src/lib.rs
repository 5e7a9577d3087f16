//! Gene list ingestion utilities.
//!
//! This crate discovers department directories under a gene list root and
//! reads their CSV files into raw, uninterpreted rows.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use genlist_ingest::{discover_category, read_rows};
//! use genlist_model::Category;
//!
//! if let Some(source) = discover_category(Path::new("lists"), Category::Germline)? {
//!     for (department, file) in source.files() {
//!         let table = read_rows(file)?;
//!         println!("{department}: {} rows", table.rows.len());
//!     }
//! }
//! ```

mod discovery;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{CsvRows, RawRow, read_rows};

// === Department Discovery ===
pub use discovery::{
    CategorySource, Department, discover_category, list_csv_files, list_subdirectories,
};
