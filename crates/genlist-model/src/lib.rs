//! Gene list data model.
//!
//! Categories, the static schema registry and the typed records produced by
//! validation. Records compare by identity key (`hugo_name`, `hgnc_id`) only.

pub mod category;
pub mod error;
pub mod record;
pub mod schema;

pub use category::{Category, Direction};
pub use error::{ModelError, Result};
pub use record::{CategoryFields, DATE_FORMAT, GeneKey, GeneRecord, format_flag};
pub use schema::{BASE_FIELDS, COMBINED_FIELDS, FieldKind, FieldSpec, HeaderLayout, Schema};
