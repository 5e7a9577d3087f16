//! Type-safe enumerations for gene list categories and their value sets.
//!
//! Categories are represented as lowercase tags on disk (one directory per
//! category); these enums keep the tag handling in one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Variant-call category a gene list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Germline variants (carries a treatment-relevance flag).
    Germline,
    /// Gene fusions.
    Fusion,
    /// Copy-number variants (carries a gain/loss direction).
    #[serde(rename = "cnv")]
    CopyNumberVariant,
    /// Single-nucleotide variants.
    #[serde(rename = "snv")]
    SingleNucleotideVariant,
}

impl Category {
    /// All supported categories, in processing order.
    pub const ALL: [Category; 4] = [
        Category::Germline,
        Category::Fusion,
        Category::CopyNumberVariant,
        Category::SingleNucleotideVariant,
    ];

    /// Returns the lowercase tag used as directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Germline => "germline",
            Category::Fusion => "fusion",
            Category::CopyNumberVariant => "cnv",
            Category::SingleNucleotideVariant => "snv",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Germline => "Germline",
            Category::Fusion => "Fusion",
            Category::CopyNumberVariant => "Copy-number variant",
            Category::SingleNucleotideVariant => "Single-nucleotide variant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "germline" => Ok(Category::Germline),
            "fusion" => Ok(Category::Fusion),
            "cnv" => Ok(Category::CopyNumberVariant),
            "snv" => Ok(Category::SingleNucleotideVariant),
            other => Err(ModelError::UnknownCategory {
                tag: other.to_string(),
            }),
        }
    }
}

/// Copy-number direction of a CNV record.
///
/// Matching is exact and case-sensitive: `Gain` is not a valid direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Gain,
    Loss,
    Both,
    Unknown,
}

impl Direction {
    /// Accepted textual values, in declaration order.
    pub const VALUES: [&'static str; 4] = ["gain", "loss", "both", "unknown"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Gain => "gain",
            Direction::Loss => "loss",
            Direction::Both => "both",
            Direction::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gain" => Ok(Direction::Gain),
            "loss" => Ok(Direction::Loss),
            "both" => Ok(Direction::Both),
            "unknown" => Ok(Direction::Unknown),
            _ => Err(format!(
                "Input should be one of {}",
                Direction::VALUES
                    .iter()
                    .map(|value| format!("'{value}'"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_tags_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_category_is_config_error() {
        let err = "indel".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown gene list category: 'indel'");
    }

    #[test]
    fn direction_is_case_sensitive() {
        assert_eq!("gain".parse::<Direction>(), Ok(Direction::Gain));
        assert!("Gain".parse::<Direction>().is_err());
        assert!("GAIN".parse::<Direction>().is_err());
    }
}
