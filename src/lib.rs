//! cohesivegov: query, inspect and export a catalog of government initiatives.
//!
//! A fixed catalog of initiative records is loaded once. A [`Dashboard`]
//! narrows and orders it with a free-text search, multi-value facet filters
//! and a sort key, recomputing the view after every change. Any record can be
//! exported as a plain-text report, JSON, CSV or a print-ready HTML page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI host (main.rs, cli.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Dashboard: store + query + derived view          │
//! │  - Event handling, Actions for the host             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query (query/)│   │ Export        │   │ UI (ui/)      │
//! │ - Facets      │   │ (export/)     │   │ - View models │
//! │ - Sort        │   │ - Text / JSON │   │ - Renderer    │
//! │ - Compiler    │   │ - CSV / Print │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage (storage/) and Domain (domain/)            │
//! │  - JSON record source, in-memory record store       │
//! │  - Initiative model, error type                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths) and Observability (tracing) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Dashboard, events and actions
//! - [`domain`]: Initiative model and errors
//! - [`export`]: The four export serializers and file naming
//! - [`infrastructure`]: Platform directories
//! - [`query`]: Query state, facets, sorting and the view compiler
//! - [`storage`]: Record sources and the record store
//! - [`ui`]: View models and plain-text rendering
//! - [`observability`]: Tracing setup with file span export
//!
//! # Configuration
//!
//! `~/.config/cohesivegov/config.toml` (all keys optional):
//!
//! ```toml
//! data_file = "~/catalogs/initiatives.json"
//! export_dir = "~/Downloads"
//! trace_level = "debug"
//! sort_key = "priority"
//! sort_direction = "desc"
//! ```
//!
//! Individual keys can be overridden with `key=value` pairs (see
//! [`Config::apply_overrides`]).
//!
//! # Example
//!
//! ```rust
//! use cohesivegov::{handle_event, initialize, Config, Event};
//! use cohesivegov::query::Facet;
//!
//! let mut dashboard = initialize(&Config::default())?;
//! handle_event(&mut dashboard, &Event::ToggleFacet {
//!     facet: Facet::BUY_IN,
//!     value: "Blocked".to_string(),
//! })?;
//! assert_eq!(dashboard.results()[0].id, "INIT-2025-015");
//! # Ok::<(), cohesivegov::DashboardError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod export;
pub mod infrastructure;
pub mod query;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Dashboard, Event, Summary, ViewSnapshot};
pub use domain::{DashboardError, Initiative, Result};
pub use export::{ExportFormat, ExportPayload};

use crate::query::{QueryState, SortDirection, SortKey};
use crate::storage::{JsonSource, RecordSource, RecordStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON catalog to load. `None` uses the bundled sample catalog.
    pub data_file: Option<PathBuf>,

    /// Directory exports are written to. Default: the download directory.
    pub export_dir: PathBuf,

    /// Tracing filter (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: Option<String>,

    /// Initial sort key. Default: `lastUpdate`
    pub sort_key: SortKey,

    /// Initial sort direction. Default: `desc`
    pub sort_direction: SortDirection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            export_dir: infrastructure::default_export_dir(),
            trace_level: None,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl Config {
    /// Reads a TOML config file. Missing keys take their defaults and a
    /// leading `~` in either path key is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Io`] if the file cannot be read and
    /// [`DashboardError::Config`] if it is not valid TOML for this struct.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)
            .map_err(|e| DashboardError::Config(format!("{}: {e}", path.display())))?;
        config.data_file = config
            .data_file
            .map(|file| infrastructure::expand_tilde(&file.to_string_lossy()));
        config.export_dir = infrastructure::expand_tilde(&config.export_dir.to_string_lossy());
        Ok(config)
    }

    /// Reads `path` if given, otherwise the default config file if it exists,
    /// otherwise returns defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_file`]. An explicit `path` that does not exist
    /// is an error; a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = infrastructure::config_file();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies `key=value` overrides on top of the current values.
    ///
    /// # Parsing Rules
    ///
    /// - `data_file`, `export_dir`: path, `~` expanded; empty `data_file`
    ///   selects the bundled sample
    /// - `trace_level`: kept verbatim
    /// - `sort_key`, `sort_direction`: parsed loosely; unparsable values keep
    ///   the current setting
    /// - unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cohesivegov::Config;
    /// use cohesivegov::query::{SortDirection, SortKey};
    ///
    /// let mut overrides = BTreeMap::new();
    /// overrides.insert("sort_key".to_string(), "priority".to_string());
    /// overrides.insert("sort_direction".to_string(), "sideways".to_string());
    ///
    /// let config = Config::default().apply_overrides(&overrides);
    /// assert_eq!(config.sort_key, SortKey::Priority);
    /// assert_eq!(config.sort_direction, SortDirection::Desc);
    /// ```
    #[must_use]
    pub fn apply_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (key, value) in overrides {
            match key.as_str() {
                "data_file" => {
                    self.data_file = (!value.trim().is_empty())
                        .then(|| infrastructure::expand_tilde(value.trim()));
                }
                "export_dir" => self.export_dir = infrastructure::expand_tilde(value.trim()),
                "trace_level" => self.trace_level = Some(value.clone()),
                "sort_key" => match value.parse() {
                    Ok(sort_key) => self.sort_key = sort_key,
                    Err(e) => tracing::debug!(value = %value, error = %e, "ignoring sort_key override"),
                },
                "sort_direction" => match value.parse() {
                    Ok(direction) => self.sort_direction = direction,
                    Err(e) => tracing::debug!(value = %value, error = %e, "ignoring sort_direction override"),
                },
                other => tracing::debug!(key = %other, "ignoring unknown config key"),
            }
        }
        self
    }

    /// The record source this configuration points at.
    #[must_use]
    pub fn record_source(&self) -> JsonSource {
        self.data_file
            .as_ref()
            .map_or_else(JsonSource::sample, |path| {
                JsonSource::from_path(infrastructure::expand_tilde(&path.to_string_lossy()))
            })
    }
}

/// Loads the configured catalog and builds a dashboard with the configured
/// default sort.
///
/// # Errors
///
/// Propagates catalog load errors (I/O, empty, malformed, duplicate ids).
///
/// # Example
///
/// ```rust
/// use cohesivegov::{initialize, Config};
/// use cohesivegov::query::SortKey;
///
/// let config = Config { sort_key: SortKey::Title, ..Default::default() };
/// let dashboard = initialize(&config)?;
/// assert_eq!(dashboard.query().sort_key(), SortKey::Title);
/// # Ok::<(), cohesivegov::DashboardError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Dashboard> {
    tracing::debug!("initializing dashboard");

    let source = config.record_source();
    let _span = tracing::info_span!("initialize", source = %source.describe()).entered();
    let records = source.load_records()?;

    let mut query = QueryState::new();
    query.set_sort(config.sort_key, config.sort_direction);

    let dashboard = Dashboard::with_query(RecordStore::load(records), query);
    tracing::info!(
        records = dashboard.store().len(),
        sort_key = %config.sort_key,
        sort_direction = %config.sort_direction,
        "dashboard ready"
    );
    Ok(dashboard)
}
