//! In-memory record store.
//!
//! Holds the immutable catalog for the session. The store is built once from
//! the source's records and exposes read-only access; its order is the
//! tie-break order for stable sorting in the view compiler.

use crate::domain::Initiative;
use std::collections::HashMap;

/// Immutable collection of initiative records with id lookup.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Initiative>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    /// Builds the store from records in source order.
    ///
    /// The store never fails: validation is the source's job. If the same id
    /// appears twice anyway, lookups resolve to the first occurrence.
    #[must_use]
    pub fn load(records: Vec<Initiative>) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            by_id.entry(record.id.clone()).or_insert(idx);
        }

        tracing::debug!(count = records.len(), "record store loaded");

        Self { records, by_id }
    }

    /// All records in original order.
    #[must_use]
    pub fn all(&self) -> &[Initiative] {
        &self.records
    }

    /// Looks up a record by id. Unknown ids yield `None`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Initiative> {
        self.by_id.get(id).and_then(|&idx| self.records.get(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
