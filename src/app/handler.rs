//! Event handling for the dashboard.
//!
//! Hosts translate user input into [`Event`]s and feed them to
//! [`handle_event`], which mutates the [`Dashboard`] and returns
//! `(needs_render, actions)`:
//!
//! ```text
//! User Input → Event → handle_event → Dashboard mutation → (render?, Actions) → Host
//! ```
//!
//! Query mutations always request a render. Exports never change the view;
//! they either yield an [`Action::WriteExport`] or, for an unknown id, an
//! [`Action::RecordNotFound`].
//!
//! # Example
//!
//! ```rust
//! use cohesivegov::app::{handle_event, Dashboard, Event};
//! use cohesivegov::storage::JsonSource;
//!
//! let mut dashboard = Dashboard::from_source(&JsonSource::sample())?;
//! let (render, actions) = handle_event(&mut dashboard, &Event::SetSearch("lithium".into()))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(dashboard.summary().total, 1);
//! # Ok::<(), cohesivegov::DashboardError>(())
//! ```

use super::{Action, Dashboard};
use crate::domain::error::Result;
use crate::export::ExportFormat;
use crate::query::{Facet, SortDirection, SortKey};
use chrono::{DateTime, Utc};

/// User intents understood by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search query.
    SetSearch(String),
    /// Adds or removes one selected value of a facet.
    ToggleFacet { facet: Facet, value: String },
    /// Removes one selected value (an "active filter chip" close).
    ClearFacet { facet: Facet, value: String },
    /// Empties every facet selection.
    ClearAll,
    SetSort {
        key: SortKey,
        direction: SortDirection,
    },
    /// Exports a record. `at` stamps the payload.
    Export {
        id: String,
        format: ExportFormat,
        at: DateTime<Utc>,
    },
}

/// Applies `event` to `dashboard`.
///
/// # Errors
///
/// Returns serializer errors from exports. Query mutations are total.
pub fn handle_event(dashboard: &mut Dashboard, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetSearch(query) => {
            dashboard.set_search(query.as_str());
            Ok((true, vec![]))
        }
        Event::ToggleFacet { facet, value } => {
            dashboard.toggle_facet_value(*facet, value);
            Ok((true, vec![]))
        }
        Event::ClearFacet { facet, value } => {
            dashboard.clear_facet(*facet, value);
            Ok((true, vec![]))
        }
        Event::ClearAll => {
            dashboard.clear_all();
            Ok((true, vec![]))
        }
        Event::SetSort { key, direction } => {
            dashboard.set_sort(*key, *direction);
            Ok((true, vec![]))
        }
        Event::Export { id, format, at } => match dashboard.export(id, *format, at)? {
            Some(payload) => {
                tracing::info!(
                    id = %id,
                    format = %format,
                    file_name = %payload.file_name,
                    "export ready"
                );
                Ok((false, vec![Action::WriteExport(payload)]))
            }
            None => {
                tracing::warn!(id = %id, "export of unknown record skipped");
                Ok((false, vec![Action::RecordNotFound { id: id.clone() }]))
            }
        },
    }
}
