//! Gene list validation.
//!
//! Turns raw rows into typed records, collects field violations and flags
//! rows that reuse a symbol or identifier within the same department file.

mod duplicates;
mod file;
mod issue;
mod validator;

pub use duplicates::{find_partial_duplicate, is_partial_duplicate};
pub use file::{validate_category, validate_file};
pub use issue::{FieldIssue, FileReport, RowProblem, RowReport};
pub use validator::{parse_flag, validate_row};
