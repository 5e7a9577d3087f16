//! Property tests for row validation.

use genlist_ingest::RawRow;
use genlist_model::{Category, GeneRecord, HeaderLayout};
use genlist_validate::validate_row;
use proptest::prelude::*;

fn raw_row(category: Category, values: &[String]) -> RawRow {
    let header = category.schema().header(HeaderLayout::Flat);
    RawRow::from_pairs(
        2,
        header
            .iter()
            .copied()
            .zip(values.iter().map(String::as_str)),
    )
}

fn valid_values() -> impl Strategy<Value = (Category, Vec<String>)> {
    (
        "[A-Z][A-Z0-9-]{0,7}",
        1u32..200_000,
        any::<bool>(),
        "[a-z0-9 \"']{0,12}",
        (1990i32..2030, 1u32..13, 1u32..29),
        "[a-z0-9 :;\"']{0,16}",
        0usize..4,
        prop_oneof![Just("gain"), Just("loss"), Just("both"), Just("unknown")],
        any::<bool>(),
    )
        .prop_map(
            |(name, id, protocol, spec, (y, m, d), notes, category, direction, relevant)| {
                let category = Category::ALL[category];
                let mut values = vec![
                    name,
                    id.to_string(),
                    protocol.to_string(),
                    spec,
                    format!("{y:04}-{m:02}-{d:02}"),
                    notes,
                ];
                match category {
                    Category::Germline => values.push(relevant.to_string()),
                    Category::CopyNumberVariant => values.push(direction.to_string()),
                    Category::Fusion | Category::SingleNucleotideVariant => {}
                }
                (category, values)
            },
        )
}

proptest! {
    #[test]
    fn valid_rows_round_trip(input in valid_values()) {
        let (category, values) = input;
        let record: GeneRecord = validate_row(category, &raw_row(category, &values))
            .map_err(|issues| TestCaseError::fail(format!("{issues:?}")))?;
        prop_assert_eq!(record.category(), category);
        prop_assert_eq!(record.to_values(), values);
    }

    #[test]
    fn symbols_with_whitespace_never_validate(
        left in "[A-Z]{1,4}",
        gap in "[ \t]{1,2}",
        right in "[A-Z0-9]{0,4}",
    ) {
        let values = vec![
            format!("{left}{gap}{right}"),
            "1".to_string(),
            "false".to_string(),
            String::new(),
            "2024-01-01".to_string(),
            String::new(),
        ];
        let issues = validate_row(Category::Fusion, &raw_row(Category::Fusion, &values))
            .expect_err("whitespace symbol");
        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(issues[0].field.as_str(), "hugo_name");
    }
}
