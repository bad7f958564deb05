//! JSON catalog source.
//!
//! Reads the initiative catalog from a JSON document whose top level is an
//! array of records. Records are decoded one at a time so a failure can name
//! the offending position.
//!
//! # File Format
//!
//! ```json
//! [
//!   {
//!     "id": "INIT-2025-001",
//!     "title": "Dismantle DEI Act",
//!     "focusArea": "Social Subjects",
//!     "leadAgency": "TBD",
//!     "status": "Planned",
//!     "progress": 0,
//!     "priority": "High",
//!     "buyIn": "Divergent",
//!     "goals": ["Draft legislation"],
//!     "stakeholders": [{ "name": "Congress", "role": "Legislative Authority" }],
//!     "tags": ["Social Subjects"],
//!     "roadmap": { "origin": "...", "destination": "...", "currentPhase": "...", "milestones": [] },
//!     "metrics": { "projectStatus": "...", "targetDate": "Q4 2025", "lastUpdate": "2025-01-12", "budget": "$2.5M" }
//!   }
//! ]
//! ```

use crate::domain::error::{DashboardError, Result};
use crate::domain::Initiative;
use crate::storage::backend::RecordSource;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Catalog bundled with the crate: the six sample initiatives.
const SAMPLE_CATALOG: &str = include_str!("../../data/initiatives.json");

#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Inline { label: String, json: String },
}

/// JSON catalog source backed by a file or an in-memory document.
#[derive(Debug, Clone)]
pub struct JsonSource {
    origin: Origin,
}

impl JsonSource {
    /// Source reading the catalog from `path` when loaded.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    /// Source over an in-memory JSON document. `label` names it in errors.
    pub fn from_json(label: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline {
                label: label.into(),
                json: json.into(),
            },
        }
    }

    /// The bundled six-record sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_json("bundled sample catalog", SAMPLE_CATALOG)
    }

    fn read(&self) -> Result<String> {
        match &self.origin {
            Origin::File(path) => {
                tracing::debug!(path = ?path, "reading catalog file");
                Ok(std::fs::read_to_string(path)?)
            }
            Origin::Inline { json, .. } => Ok(json.clone()),
        }
    }
}

impl RecordSource for JsonSource {
    fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Inline { label, .. } => label.clone(),
        }
    }

    fn load_records(&self) -> Result<Vec<Initiative>> {
        let _span = tracing::debug_span!("json_load_records", source = %self.describe()).entered();

        let contents = self.read()?;
        let raw: Vec<serde_json::Value> = serde_json::from_str(&contents)
            .map_err(|e| DashboardError::Source(format!("expected a JSON array of records: {e}")))?;

        if raw.is_empty() {
            tracing::warn!("catalog holds no records");
            return Err(DashboardError::EmptySource(self.describe()));
        }

        let mut seen = HashSet::with_capacity(raw.len());
        let mut records = Vec::with_capacity(raw.len());

        for (index, value) in raw.into_iter().enumerate() {
            let record: Initiative = serde_json::from_value(value)
                .map_err(|e| DashboardError::MalformedRecord {
                    index,
                    message: e.to_string(),
                })?;

            if !seen.insert(record.id.clone()) {
                return Err(DashboardError::DuplicateId(record.id));
            }
            records.push(record);
        }

        tracing::debug!(count = records.len(), "catalog loaded");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_has_six_records_in_order() {
        let records = JsonSource::sample().load_records().unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "INIT-2025-001",
                "INIT-2025-003",
                "INIT-2025-007",
                "INIT-2025-009",
                "INIT-2025-012",
                "INIT-2025-015",
            ]
        );
    }

    #[test]
    fn empty_array_is_reported_as_empty_source() {
        let err = JsonSource::from_json("empty", "[]").load_records().unwrap_err();
        assert!(matches!(err, DashboardError::EmptySource(ref label) if label == "empty"));
    }

    #[test]
    fn non_array_document_is_a_source_error() {
        let err = JsonSource::from_json("obj", r#"{"id": "x"}"#)
            .load_records()
            .unwrap_err();
        assert!(matches!(err, DashboardError::Source(_)));
    }

    #[test]
    fn missing_required_field_names_the_record() {
        let records = JsonSource::sample().load_records().unwrap();
        let mut values: Vec<serde_json::Value> = records
            .iter()
            .map(|r| serde_json::to_value(r).unwrap())
            .collect();
        values[2].as_object_mut().unwrap().remove("metrics");
        let json = serde_json::to_string(&values).unwrap();

        let err = JsonSource::from_json("broken", json).load_records().unwrap_err();
        match err {
            DashboardError::MalformedRecord { index, message } => {
                assert_eq!(index, 2);
                assert!(message.contains("metrics"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let records = JsonSource::sample().load_records().unwrap();
        let doubled = vec![records[0].clone(), records[0].clone()];
        let json = serde_json::to_string(&doubled).unwrap();

        let err = JsonSource::from_json("dup", json).load_records().unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateId(ref id) if id == "INIT-2025-001"));
    }

    #[test]
    fn reads_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let records = JsonSource::sample().load_records().unwrap();
        std::fs::write(&path, serde_json::to_string(&records[..2]).unwrap()).unwrap();

        let loaded = JsonSource::from_path(&path).load_records().unwrap();
        assert_eq!(loaded, records[..2].to_vec());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonSource::from_path(dir.path().join("nope.json"))
            .load_records()
            .unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
