//! Integration tests for the cohesivegov library
//!
//! These tests drive the public API end to end: load a catalog from disk,
//! mutate the query through events, and write exports into temporary
//! directories.

use chrono::{TimeZone, Utc};
use cohesivegov::export::json::parse_export;
use cohesivegov::query::{Facet, SortDirection, SortKey};
use cohesivegov::storage::{JsonSource, RecordSource};
use cohesivegov::{handle_event, initialize, Action, Config, DashboardError, Event, ExportFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to write the bundled catalog into a temporary directory
fn write_sample_catalog(dir: &Path) -> PathBuf {
    let records = JsonSource::sample().load_records().unwrap();
    let path = dir.join("initiatives.json");
    fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();
    path
}

fn config_for(catalog: PathBuf, export_dir: &Path) -> Config {
    Config {
        data_file: Some(catalog),
        export_dir: export_dir.to_path_buf(),
        ..Default::default()
    }
}

/// Helper function to run an export event and persist the result like the CLI does
fn export_to_dir(config: &Config, id: &str, format: ExportFormat) -> Option<PathBuf> {
    let mut dashboard = initialize(config).unwrap();
    let event = Event::Export {
        id: id.to_string(),
        format,
        at: Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
    };
    let (_, actions) = handle_event(&mut dashboard, &event).unwrap();
    match actions.as_slice() {
        [Action::WriteExport(payload)] => {
            let path = config.export_dir.join(&payload.file_name);
            fs::write(&path, &payload.content).unwrap();
            Some(path)
        }
        [Action::RecordNotFound { .. }] => None,
        other => panic!("unexpected actions {other:?}"),
    }
}

#[test]
fn test_catalog_from_disk_matches_bundled_sample() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());

    let dashboard = initialize(&config).unwrap();
    let sample = JsonSource::sample().load_records().unwrap();
    assert_eq!(dashboard.store().all(), sample.as_slice());
}

#[test]
fn test_query_session_through_events() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());
    let mut dashboard = initialize(&config).unwrap();

    let events = [
        Event::SetSort {
            key: SortKey::Priority,
            direction: SortDirection::Desc,
        },
        Event::ToggleFacet {
            facet: Facet::STATUS,
            value: "In Progress".to_string(),
        },
        Event::ToggleFacet {
            facet: Facet::STATUS,
            value: "Planned".to_string(),
        },
    ];
    for event in &events {
        handle_event(&mut dashboard, event).unwrap();
    }

    let results = dashboard.results();
    assert!(results
        .iter()
        .all(|r| r.status == "In Progress" || r.status == "Planned"));
    let ranks: Vec<u8> = results.iter().map(|r| r.priority_rank()).collect();
    assert!(ranks.windows(2).all(|w| w[0] >= w[1]));

    let summary = dashboard.summary();
    assert_eq!(summary.total, summary.in_progress + summary.planned);

    handle_event(&mut dashboard, &Event::ClearAll).unwrap();
    assert_eq!(dashboard.summary().total, 6);
    assert_eq!(dashboard.results()[0].id, "INIT-2025-003");
}

#[test]
fn test_text_export_written_with_conventional_name() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());

    let path = export_to_dir(&config, "INIT-2025-001", ExportFormat::Text).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("INIT-2025-001_dismantle_dei_act.txt")
    );

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Dismantle DEI Act\n\nINIT-2025-001  ·  Planned\n\n"));
    assert!(text.ends_with("Exported on 2025-01-15 at 09:30:00\n"));
}

#[test]
fn test_csv_export_rows() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());

    let path = export_to_dir(&config, "INIT-2025-001", ExportFormat::Csv).unwrap();
    let csv = fs::read_to_string(path).unwrap();
    assert!(csv.contains("\"Progress\",\"0%\""));
    assert!(csv.contains("\"Tags\",\"Social Subjects, Government Operations\""));
}

#[test]
fn test_json_export_reads_back_identically() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());
    let dashboard = initialize(&config).unwrap();

    for record in dashboard.store().all() {
        let path = export_to_dir(&config, &record.id, ExportFormat::Json).unwrap();
        let (parsed, exported_on) = parse_export(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(&parsed, record);
        assert_eq!(exported_on.as_deref(), Some("2025-01-15T09:30:00Z"));
    }
}

#[test]
fn test_print_export_is_html() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());

    let path = export_to_dir(&config, "INIT-2025-015", ExportFormat::Print).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("html"));
    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains("<h2>CURRENT STATUS</h2>"));
}

#[test]
fn test_unknown_id_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_sample_catalog(dir.path()), dir.path());

    assert!(export_to_dir(&config, "INIT-0000-000", ExportFormat::Text).is_none());
    let written: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(written.len(), 1, "only the catalog should exist");
}

#[test]
fn test_malformed_catalog_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"id": "INIT-1", "title": "Missing everything"}]"#).unwrap();

    let err = initialize(&config_for(path, dir.path())).unwrap_err();
    assert!(matches!(err, DashboardError::MalformedRecord { index: 0, .. }));
}

#[test]
fn test_empty_catalog_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let err = initialize(&config_for(path, dir.path())).unwrap_err();
    assert!(matches!(err, DashboardError::EmptySource(_)));
}
