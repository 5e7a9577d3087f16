//! Tests for genlist-model types.

use chrono::NaiveDate;
use genlist_model::{Category, CategoryFields, GeneRecord, HeaderLayout};

#[test]
fn record_serializes_with_category_tag() {
    let record = GeneRecord {
        hugo_name: "BRCA2".to_string(),
        hgnc_id: 1101,
        protocol: true,
        protocol_specification: Some("PRX-7".to_string()),
        date_added: NaiveDate::from_ymd_opt(2023, 11, 2).expect("date"),
        notes: None,
        details: CategoryFields::Germline {
            treatment_relevant: true,
        },
    };
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["category"], "germline");
    assert_eq!(json["treatment_relevant"], true);
    assert_eq!(json["date_added"], "2023-11-02");
    assert_eq!(record.category(), Category::Germline);
}

#[test]
fn every_category_has_a_combined_header_ending_in_totals() {
    for category in Category::ALL {
        let header = category.schema().header(HeaderLayout::Combined);
        assert_eq!(header.first(), Some(&"hugo_name"));
        assert_eq!(&header[header.len() - 2..], &["departments", "total"]);
    }
}

#[test]
fn category_serde_uses_directory_tags() {
    let json = serde_json::to_string(&Category::CopyNumberVariant).expect("serialize");
    assert_eq!(json, "\"cnv\"");
    let parsed: Category = serde_json::from_str("\"snv\"").expect("deserialize");
    assert_eq!(parsed, Category::SingleNucleotideVariant);
}
