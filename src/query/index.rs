//! Facet index: the selectable values for each facet.

use super::facet::Facet;
use crate::domain::Initiative;
use std::collections::BTreeSet;

/// Distinct values of `facet` across `records`, sorted lexicographically.
///
/// For [`Facet::StakeholderName`] the stakeholder names of every record are
/// flattened before deduplication.
#[must_use]
pub fn distinct_values(records: &[Initiative], facet: Facet) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|record| facet.values_of(record))
        .map(str::to_string)
        .collect()
}

/// Distinct values for every facet, computed once from the record store.
#[derive(Debug, Clone, Default)]
pub struct FacetIndex {
    values: [BTreeSet<String>; Facet::COUNT],
}

impl FacetIndex {
    #[must_use]
    pub fn build(records: &[Initiative]) -> Self {
        let _span = tracing::debug_span!("build_facet_index", records = records.len()).entered();
        Self {
            values: Facet::ALL.map(|facet| distinct_values(records, facet)),
        }
    }

    #[must_use]
    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        &self.values[facet.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonSource, RecordSource};

    #[test]
    fn scalar_facet_values_are_sorted_and_unique() {
        let records = JsonSource::sample().load_records().unwrap();
        let values: Vec<String> = distinct_values(&records, Facet::BUY_IN).into_iter().collect();
        assert_eq!(values, vec!["Blocked", "Divergent", "Unified"]);
    }

    #[test]
    fn stakeholder_names_are_flattened() {
        let records = JsonSource::sample().load_records().unwrap();
        let names = distinct_values(&records, Facet::StakeholderName);
        assert!(names.contains("Interior"));
        assert!(names.contains("Executive Office"));
        // "Congress" and "Executive Office" appear on two records each.
        assert_eq!(names.len(), 14);
        assert_eq!(names.iter().next().map(String::as_str), Some("CISA"));
    }

    #[test]
    fn index_matches_direct_computation() {
        let records = JsonSource::sample().load_records().unwrap();
        let index = FacetIndex::build(&records);
        for facet in Facet::ALL {
            assert_eq!(index.values(facet), &distinct_values(&records, facet));
        }
    }
}
