//! Query state: search string, facet selections and sort order.
//!
//! [`QueryState`] is an owned value. It is mutated only through the five
//! operations below, each of which is total, and it is read by the view
//! compiler. Recomputing the view after a mutation is the caller's job (see
//! [`Dashboard`](crate::app::Dashboard)).

use super::facet::Facet;
use super::sort::{SortDirection, SortKey};
use std::collections::BTreeSet;

/// Current search, filters and sort for one dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    search_query: String,
    /// Selected values per facet, indexed by [`Facet::index`].
    filters: [BTreeSet<String>; Facet::COUNT],
    sort_key: SortKey,
    sort_direction: SortDirection,
}

impl QueryState {
    /// Empty search, no filters, sorted by `lastUpdate` descending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    #[must_use]
    pub const fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Values currently selected for `facet`.
    #[must_use]
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        &self.filters[facet.index()]
    }

    /// Facets with at least one selected value, with their selections.
    pub fn active_facets(&self) -> impl Iterator<Item = (Facet, &BTreeSet<String>)> {
        Facet::ALL
            .into_iter()
            .map(|facet| (facet, self.selected(facet)))
            .filter(|(_, values)| !values.is_empty())
    }

    /// Flattened `(facet, value)` pairs, in facet order then value order.
    #[must_use]
    pub fn active_filters(&self) -> Vec<(Facet, &str)> {
        self.active_facets()
            .flat_map(|(facet, values)| values.iter().map(move |v| (facet, v.as_str())))
            .collect()
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filters.iter().any(|values| !values.is_empty())
    }

    /// Replaces the search query verbatim.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Adds `value` to the facet's selection, or removes it if already there.
    pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) {
        let values = &mut self.filters[facet.index()];
        if !values.remove(value) {
            values.insert(value.to_string());
        }
    }

    /// Removes `value` from the facet's selection. No-op if absent.
    pub fn clear_facet(&mut self, facet: Facet, value: &str) {
        self.filters[facet.index()].remove(value);
    }

    /// Empties every facet selection. Search and sort are left alone.
    pub fn clear_all(&mut self) {
        for values in &mut self.filters {
            values.clear();
        }
    }

    /// Replaces sort key and direction together.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }
}
