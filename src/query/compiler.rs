//! View compiler: records + query state → ordered result sequence.
//!
//! # Algorithm
//!
//! 1. **Search**: a non-empty query is lowercased and must be a substring of
//!    the lowercased title, id, focus area or lead agency, or of any tag.
//! 2. **Facets**: every active facet must match (AND); within a facet any
//!    selected value may match (OR).
//! 3. **Sort**: stable sort by the query's key and direction. Records that
//!    compare equal keep their record-store order.
//!
//! The compiler is pure: it borrows the records and returns references into
//! them, leaving both inputs untouched.

use super::state::QueryState;
use crate::domain::Initiative;

/// Derives the ordered view for `query` over `records`.
///
/// # Example
///
/// ```rust
/// use cohesivegov::query::{compile, QueryState};
/// use cohesivegov::storage::{JsonSource, RecordSource};
///
/// let records = JsonSource::sample().load_records()?;
/// let mut query = QueryState::new();
/// query.set_search("lithium");
///
/// let view = compile(&records, &query);
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].id, "INIT-2025-007");
/// # Ok::<(), cohesivegov::DashboardError>(())
/// ```
#[must_use]
pub fn compile<'a>(records: &'a [Initiative], query: &QueryState) -> Vec<&'a Initiative> {
    compile_positions(records, query)
        .into_iter()
        .map(|pos| &records[pos])
        .collect()
}

/// Same pipeline as [`compile`], returning positions into `records` instead
/// of references. Used by owners that cache the view next to the records.
#[must_use]
pub fn compile_positions(records: &[Initiative], query: &QueryState) -> Vec<usize> {
    let _span = tracing::debug_span!("compile_view",
        total_records = records.len(),
        query_len = query.search_query().len(),
        sort_key = %query.sort_key(),
        sort_direction = %query.sort_direction()
    ).entered();

    let needle = query.search_query().to_lowercase();

    let mut positions: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_search(record, &needle))
        .filter(|(_, record)| matches_facets(record, query))
        .map(|(pos, _)| pos)
        .collect();

    let key = query.sort_key();
    let direction = query.sort_direction();
    positions.sort_by(|&a, &b| direction.apply(key.compare(&records[a], &records[b])));

    tracing::debug!(result_count = positions.len(), "view compiled");
    positions
}

/// Search stage. `needle` must already be lowercased; empty matches all.
#[must_use]
pub fn matches_search(record: &Initiative, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);

    contains(&record.title)
        || contains(&record.id)
        || contains(&record.focus_area)
        || contains(&record.lead_agency)
        || record.tags.iter().any(|tag| contains(tag))
}

/// Facet stage: every active facet of `query` must accept the record.
#[must_use]
pub fn matches_facets(record: &Initiative, query: &QueryState) -> bool {
    query
        .active_facets()
        .all(|(facet, selected)| facet.matches(record, selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::initiative::fixtures::bare;
    use crate::query::facet::Facet;
    use crate::query::sort::{SortDirection, SortKey};
    use crate::storage::{JsonSource, RecordSource};

    fn sample() -> Vec<Initiative> {
        JsonSource::sample().load_records().unwrap()
    }

    fn ids<'a>(view: &[&'a Initiative]) -> Vec<&'a str> {
        view.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn default_query_sorts_newest_update_first_with_stable_ties() {
        let records = sample();
        let view = compile(&records, &QueryState::new());
        // 001, 003 and 012 share 2025-01-12 and keep their store order.
        assert_eq!(
            ids(&view),
            vec![
                "INIT-2025-001",
                "INIT-2025-003",
                "INIT-2025-012",
                "INIT-2025-009",
                "INIT-2025-007",
                "INIT-2025-015",
            ]
        );
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let records = sample();
        let mut query = QueryState::new();
        query.set_search("lithium");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-007"]);
    }

    #[test]
    fn search_matches_tags_id_and_agency() {
        let records = sample();
        let mut query = QueryState::new();

        query.set_search("connectivity");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-015"]);

        query.set_search("init-2025-009");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-009"]);

        query.set_search("cisa");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-012"]);
    }

    #[test]
    fn search_does_not_trim_the_query() {
        let records = sample();
        let mut query = QueryState::new();
        query.set_search(" lithium");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-007"]);

        query.set_search("  lithium");
        assert!(compile(&records, &query).is_empty());
    }

    #[test]
    fn blocked_buy_in_filter() {
        let records = sample();
        let mut query = QueryState::new();
        query.toggle_facet_value(Facet::BUY_IN, "Blocked");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-015"]);
    }

    #[test]
    fn values_within_a_facet_are_ored_and_facets_are_anded() {
        let records = sample();
        let mut query = QueryState::new();
        query.set_sort(SortKey::Title, SortDirection::Asc);
        query.toggle_facet_value(Facet::PRIORITY, "Critical");
        query.toggle_facet_value(Facet::PRIORITY, "Medium");
        assert_eq!(
            ids(&compile(&records, &query)),
            vec!["INIT-2025-003", "INIT-2025-009", "INIT-2025-012"]
        );

        query.toggle_facet_value(Facet::FOCUS_AREA, "Government Operations");
        assert_eq!(
            ids(&compile(&records, &query)),
            vec!["INIT-2025-003", "INIT-2025-009"]
        );
    }

    #[test]
    fn stakeholder_facet_matches_nested_names() {
        let records = sample();
        let mut query = QueryState::new();
        query.toggle_facet_value(Facet::StakeholderName, "Interior");
        assert_eq!(ids(&compile(&records, &query)), vec!["INIT-2025-007"]);

        query.toggle_facet_value(Facet::StakeholderName, "Congress");
        query.set_sort(SortKey::Progress, SortDirection::Asc);
        assert_eq!(
            ids(&compile(&records, &query)),
            vec!["INIT-2025-001", "INIT-2025-007", "INIT-2025-009"]
        );
    }

    #[test]
    fn unmatched_filter_value_yields_nothing() {
        let records = sample();
        let mut query = QueryState::new();
        query.toggle_facet_value(Facet::STATUS, "Cancelled");
        assert!(compile(&records, &query).is_empty());
    }

    #[test]
    fn priority_descending_puts_critical_first() {
        let records = sample();
        let mut query = QueryState::new();
        query.set_sort(SortKey::Priority, SortDirection::Desc);
        let view = ids(&compile(&records, &query));
        assert_eq!(
            view,
            vec![
                "INIT-2025-003",
                "INIT-2025-012",
                "INIT-2025-001",
                "INIT-2025-007",
                "INIT-2025-015",
                "INIT-2025-009",
            ]
        );
        let pos = |id: &str| view.iter().position(|v| *v == id);
        assert!(pos("INIT-2025-003") < pos("INIT-2025-001"));
    }

    #[test]
    fn ascending_ties_also_keep_store_order() {
        let records = sample();
        let mut query = QueryState::new();
        query.set_sort(SortKey::Progress, SortDirection::Asc);
        let view = ids(&compile(&records, &query));
        assert_eq!(&view[..2], &["INIT-2025-001", "INIT-2025-015"]);

        query.set_sort(SortKey::Progress, SortDirection::Desc);
        let view = ids(&compile(&records, &query));
        assert_eq!(&view[4..], &["INIT-2025-001", "INIT-2025-015"]);
    }

    #[test]
    fn unknown_priority_and_bad_dates_sort_lowest() {
        let mut odd = bare("X", "odd");
        odd.priority = "Someday".into();
        odd.metrics.last_update = "n/a".into();
        let records = vec![odd, bare("Y", "normal")];

        let mut query = QueryState::new();
        query.set_sort(SortKey::Priority, SortDirection::Desc);
        assert_eq!(ids(&compile(&records, &query)), vec!["Y", "X"]);

        query.set_sort(SortKey::LastUpdate, SortDirection::Desc);
        assert_eq!(ids(&compile(&records, &query)), vec!["Y", "X"]);
    }

    #[test]
    fn widening_a_facet_never_shrinks_and_clearing_restores_the_searched_view() {
        let records = sample();

        let mut query = QueryState::new();
        query.set_search("e");
        query.set_sort(SortKey::Title, SortDirection::Asc);
        let baseline = ids(&compile(&records, &query));
        assert!(!baseline.is_empty());

        query.toggle_facet_value(Facet::STATUS, "Planned");
        let narrowed = compile(&records, &query).len();
        query.toggle_facet_value(Facet::STATUS, "In Progress");
        assert!(compile(&records, &query).len() >= narrowed);

        query.toggle_facet_value(Facet::BUY_IN, "Divergent");
        assert!(compile(&records, &query).len() <= baseline.len());

        query.clear_all();
        assert_eq!(query.search_query(), "e");
        assert_eq!(ids(&compile(&records, &query)), baseline);
    }

    #[test]
    fn compile_leaves_records_untouched() {
        let records = sample();
        let snapshot = records.clone();
        let mut query = QueryState::new();
        query.set_sort(SortKey::Title, SortDirection::Asc);
        let _ = compile(&records, &query);
        assert_eq!(records, snapshot);
    }
}
