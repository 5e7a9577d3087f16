//! Duplicate detection within a single department file.
//!
//! A row collides when either its symbol or its identifier was already used
//! by an accepted row. Partial collisions usually mean a typo'd identifier or
//! an identifier given to two symbols, so both axes are checked separately.
//! Cross-department identity checks live in `genlist-core`.

use genlist_model::GeneRecord;

/// Returns the first accepted record sharing the symbol or the identifier.
pub fn find_partial_duplicate<'a>(
    existing: &'a [GeneRecord],
    candidate: &GeneRecord,
) -> Option<&'a GeneRecord> {
    existing.iter().find(|gene| {
        gene.hugo_name == candidate.hugo_name || gene.hgnc_id == candidate.hgnc_id
    })
}

pub fn is_partial_duplicate(existing: &[GeneRecord], candidate: &GeneRecord) -> bool {
    find_partial_duplicate(existing, candidate).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use genlist_model::CategoryFields;
    use proptest::prelude::*;

    fn gene(name: &str, id: u32) -> GeneRecord {
        GeneRecord {
            hugo_name: name.to_string(),
            hgnc_id: id,
            protocol: false,
            protocol_specification: None,
            date_added: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            notes: None,
            details: CategoryFields::SingleNucleotideVariant,
        }
    }

    #[test]
    fn symbol_or_identifier_match_is_duplicate() {
        let existing = vec![gene("X", 1)];
        assert!(is_partial_duplicate(&existing, &gene("X", 2)));
        assert!(is_partial_duplicate(&existing, &gene("Y", 1)));
        assert!(!is_partial_duplicate(&existing, &gene("Y", 2)));
    }

    #[test]
    fn empty_list_has_no_duplicates() {
        assert!(!is_partial_duplicate(&[], &gene("X", 1)));
    }

    #[test]
    fn reports_first_colliding_record() {
        let existing = vec![gene("A", 1), gene("B", 2), gene("C", 2)];
        let hit = find_partial_duplicate(&existing, &gene("D", 2)).unwrap();
        assert_eq!(hit.hugo_name, "B");
    }

    proptest! {
        #[test]
        fn duplicate_iff_either_axis_matches(
            genes in proptest::collection::vec(("[A-E]", 1u32..6), 0..8),
            name in "[A-E]",
            id in 1u32..6,
        ) {
            let existing: Vec<GeneRecord> =
                genes.iter().map(|(n, i)| gene(n, *i)).collect();
            let expected = genes.iter().any(|(n, i)| *n == name || *i == id);
            prop_assert_eq!(is_partial_duplicate(&existing, &gene(&name, id)), expected);
        }
    }
}
