//! JSON export.
//!
//! The payload is the record itself, field for field in its camelCase wire
//! form, with one extra top-level `exportedOn` timestamp. Absent optional
//! sections stay absent, so [`parse_export`] reads an export back into a
//! record equal to the one exported.

use crate::domain::{DashboardError, Initiative, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Name of the timestamp field added next to the record fields.
pub const EXPORTED_ON_FIELD: &str = "exportedOn";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    #[serde(flatten)]
    initiative: &'a Initiative,
    exported_on: String,
}

/// Serializes `record` as pretty-printed JSON stamped with `exported_at`.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] if serialization fails.
pub fn to_json(record: &Initiative, exported_at: &DateTime<Utc>) -> Result<String> {
    let document = ExportDocument {
        initiative: record,
        exported_on: exported_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    serde_json::to_string_pretty(&document)
        .map_err(|e| DashboardError::Export(format!("JSON serialization failed: {e}")))
}

/// Reads a JSON export back into the record it was produced from.
///
/// The `exportedOn` field is returned separately when present.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] if `json` is not an object or does not
/// hold a complete record.
pub fn parse_export(json: &str) -> Result<(Initiative, Option<String>)> {
    let mut value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| DashboardError::Export(format!("invalid JSON export: {e}")))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| DashboardError::Export("JSON export is not an object".to_string()))?;
    let exported_on = object
        .remove(EXPORTED_ON_FIELD)
        .and_then(|v| v.as_str().map(str::to_string));

    let record = serde_json::from_value(value)
        .map_err(|e| DashboardError::Export(format!("JSON export is not a record: {e}")))?;
    Ok((record, exported_on))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::initiative::fixtures::bare;
    use crate::storage::{JsonSource, RecordSource};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn every_sample_record_survives_export_and_reparse() {
        for record in JsonSource::sample().load_records().unwrap() {
            let json = to_json(&record, &at()).unwrap();
            let (parsed, exported_on) = parse_export(&json).unwrap();
            assert_eq!(parsed, record, "record {} changed", record.id);
            assert_eq!(exported_on.as_deref(), Some("2025-01-15T09:30:00Z"));
        }
    }

    #[test]
    fn nested_sections_keep_their_shape() {
        let records = JsonSource::sample().load_records().unwrap();
        let json = to_json(&records[0], &at()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["actionPlan"][0]["quarter"], "Q1 2025");
        assert_eq!(value["stakeholders"][1]["role"], "Policy Oversight");
        assert_eq!(value["roadmap"]["milestones"].as_array().unwrap().len(), 5);
        assert_eq!(value["metrics"]["budget"], "$2.5M");
        assert_eq!(value["buyIn"], "Divergent");
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let json = to_json(&bare("A", "a"), &at()).unwrap();
        assert!(!json.contains("\"vision\""));
        assert!(!json.contains("null"));
        assert!(json.contains("\"exportedOn\": \"2025-01-15T09:30:00Z\""));
    }

    #[test]
    fn non_object_export_is_rejected() {
        assert!(matches!(parse_export("[1, 2]"), Err(DashboardError::Export(_))));
        assert!(matches!(parse_export("{\"id\": \"A\"}"), Err(DashboardError::Export(_))));
    }
}
