//! Dashboard state: the record store, the query and the derived view.
//!
//! [`Dashboard`] is the single owner of everything the query engine needs.
//! Core data (the store and its facet index) never changes after
//! construction; the query changes through the five mutation methods, and
//! each of them recompiles the view before returning a [`ViewSnapshot`]. The
//! cached view is therefore always consistent with the query.

use crate::domain::{Initiative, Result, STATUS_IN_PROGRESS, STATUS_PLANNED};
use crate::export::{self, ExportFormat, ExportPayload};
use crate::query::{compile_positions, Facet, FacetIndex, QueryState, SortDirection, SortKey};
use crate::storage::{RecordSource, RecordStore};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Headline counts over the current result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub in_progress: usize,
    pub planned: usize,
}

impl Summary {
    fn of<'a>(results: impl IntoIterator<Item = &'a Initiative>) -> Self {
        results.into_iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            match record.status.as_str() {
                STATUS_IN_PROGRESS => acc.in_progress += 1,
                STATUS_PLANNED => acc.planned += 1,
                _ => {}
            }
            acc
        })
    }
}

/// The ordered results and their summary right after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot<'a> {
    pub results: Vec<&'a Initiative>,
    pub summary: Summary,
}

/// Record store, query state and cached view for one session.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: RecordStore,
    facets: FacetIndex,
    query: QueryState,
    /// Positions into `store.all()`, in view order.
    view: Vec<usize>,
}

impl Dashboard {
    /// Builds a dashboard over `store` with the default query.
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self::with_query(store, QueryState::new())
    }

    /// Builds a dashboard with an initial query (e.g. a configured sort).
    #[must_use]
    pub fn with_query(store: RecordStore, query: QueryState) -> Self {
        let facets = FacetIndex::build(store.all());
        let mut dashboard = Self {
            store,
            facets,
            query,
            view: Vec::new(),
        };
        dashboard.recompute();
        dashboard
    }

    /// Loads every record from `source` and builds a dashboard over them.
    ///
    /// # Errors
    ///
    /// Propagates the source's load error (empty, malformed, duplicate ids,
    /// I/O).
    pub fn from_source(source: &dyn RecordSource) -> Result<Self> {
        let _span = tracing::info_span!("load_catalog", source = %source.describe()).entered();
        let records = source.load_records()?;
        tracing::info!(count = records.len(), "catalog loaded");
        Ok(Self::new(RecordStore::load(records)))
    }

    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[must_use]
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// The current result set in view order.
    #[must_use]
    pub fn results(&self) -> Vec<&Initiative> {
        let records = self.store.all();
        self.view.iter().map(|&pos| &records[pos]).collect()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::of(self.results())
    }

    /// Current results and summary.
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        let results = self.results();
        let summary = Summary::of(results.iter().copied());
        ViewSnapshot { results, summary }
    }

    pub fn set_search(&mut self, query: impl Into<String>) -> ViewSnapshot<'_> {
        let query = query.into();
        tracing::debug!(query = %query, "set search");
        self.query.set_search(query);
        self.recompute_snapshot()
    }

    pub fn toggle_facet_value(&mut self, facet: Facet, value: &str) -> ViewSnapshot<'_> {
        tracing::debug!(facet = %facet, value, "toggle facet value");
        self.query.toggle_facet_value(facet, value);
        self.recompute_snapshot()
    }

    pub fn clear_facet(&mut self, facet: Facet, value: &str) -> ViewSnapshot<'_> {
        tracing::debug!(facet = %facet, value, "clear facet value");
        self.query.clear_facet(facet, value);
        self.recompute_snapshot()
    }

    /// Empties every facet selection. Search and sort are kept.
    pub fn clear_all(&mut self) -> ViewSnapshot<'_> {
        tracing::debug!("clear all filters");
        self.query.clear_all();
        self.recompute_snapshot()
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) -> ViewSnapshot<'_> {
        tracing::debug!(sort_key = %key, sort_direction = %direction, "set sort");
        self.query.set_sort(key, direction);
        self.recompute_snapshot()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Initiative> {
        self.store.find_by_id(id)
    }

    /// Selectable values of `facet` across the whole catalog.
    #[must_use]
    pub fn distinct_values(&self, facet: Facet) -> &BTreeSet<String> {
        self.facets.values(facet)
    }

    /// Exports the record `id` in `format`, stamped with `now`.
    ///
    /// Returns `None` for an unknown id. The query and view are untouched.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures from [`export::export`].
    pub fn export(
        &self,
        id: &str,
        format: ExportFormat,
        now: &DateTime<Utc>,
    ) -> Result<Option<ExportPayload>> {
        let Some(record) = self.find_by_id(id) else {
            tracing::debug!(id, "export requested for unknown id");
            return Ok(None);
        };
        export::export(record, format, now).map(Some)
    }

    fn recompute(&mut self) {
        self.view = compile_positions(self.store.all(), &self.query);
    }

    fn recompute_snapshot(&mut self) -> ViewSnapshot<'_> {
        self.recompute();
        self.snapshot()
    }
}
