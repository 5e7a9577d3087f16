//! Typed gene records.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::{Category, Direction};

/// Date format used on input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identity of a gene: HUGO symbol plus HGNC identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GeneKey {
    pub hugo_name: String,
    pub hgnc_id: u32,
}

impl fmt::Display for GeneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HGNC:{})", self.hugo_name, self.hgnc_id)
    }
}

/// Category-specific payload of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CategoryFields {
    Germline {
        /// `behandlings_relevans`: relevant for treatment decisions.
        treatment_relevant: bool,
    },
    Fusion,
    #[serde(rename = "cnv")]
    CopyNumberVariant {
        /// `gain_loss_both`.
        direction: Direction,
    },
    #[serde(rename = "snv")]
    SingleNucleotideVariant,
}

impl CategoryFields {
    pub fn category(&self) -> Category {
        match self {
            CategoryFields::Germline { .. } => Category::Germline,
            CategoryFields::Fusion => Category::Fusion,
            CategoryFields::CopyNumberVariant { .. } => Category::CopyNumberVariant,
            CategoryFields::SingleNucleotideVariant => Category::SingleNucleotideVariant,
        }
    }

    /// Values in the order of the schema's category-specific fields.
    pub fn values(&self) -> Vec<String> {
        match self {
            CategoryFields::Germline { treatment_relevant } => {
                vec![format_flag(*treatment_relevant).to_string()]
            }
            CategoryFields::CopyNumberVariant { direction } => vec![direction.to_string()],
            CategoryFields::Fusion | CategoryFields::SingleNucleotideVariant => Vec::new(),
        }
    }
}

/// One validated row of a department gene list.
///
/// Equality and hashing only look at the identity key, so two rows for the
/// same gene compare equal even if notes or dates differ.
#[derive(Debug, Clone, Serialize)]
pub struct GeneRecord {
    pub hugo_name: String,
    pub hgnc_id: u32,
    pub protocol: bool,
    pub protocol_specification: Option<String>,
    pub date_added: NaiveDate,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub details: CategoryFields,
}

impl GeneRecord {
    pub fn key(&self) -> GeneKey {
        GeneKey {
            hugo_name: self.hugo_name.clone(),
            hgnc_id: self.hgnc_id,
        }
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    /// Field values in header order (base fields, then category fields).
    pub fn to_values(&self) -> Vec<String> {
        let mut values = vec![
            self.hugo_name.clone(),
            self.hgnc_id.to_string(),
            format_flag(self.protocol).to_string(),
            self.protocol_specification.clone().unwrap_or_default(),
            self.date_added.format(DATE_FORMAT).to_string(),
            self.notes.clone().unwrap_or_default(),
        ];
        values.extend(self.details.values());
        values
    }
}

impl PartialEq for GeneRecord {
    fn eq(&self, other: &Self) -> bool {
        self.hugo_name == other.hugo_name && self.hgnc_id == other.hgnc_id
    }
}

impl Eq for GeneRecord {}

impl Hash for GeneRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hugo_name.hash(state);
        self.hgnc_id.hash(state);
    }
}

pub fn format_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(name: &str, id: u32, notes: Option<&str>) -> GeneRecord {
        GeneRecord {
            hugo_name: name.to_string(),
            hgnc_id: id,
            protocol: false,
            protocol_specification: None,
            date_added: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            notes: notes.map(str::to_string),
            details: CategoryFields::Fusion,
        }
    }

    #[test]
    fn equality_is_identity_only() {
        let a = record("BRCA1", 1100, Some("first"));
        let b = record("BRCA1", 1100, Some("second"));
        let c = record("BRCA1", 1101, Some("first"));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<GeneRecord> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn values_follow_header_order() {
        let mut row = record("TP53", 11998, Some("hotspot"));
        row.details = CategoryFields::CopyNumberVariant {
            direction: Direction::Loss,
        };
        assert_eq!(
            row.to_values(),
            vec![
                "TP53",
                "11998",
                "false",
                "",
                "2024-03-01",
                "hotspot",
                "loss"
            ]
        );
    }
}
