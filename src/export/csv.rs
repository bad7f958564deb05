//! CSV export: one `Field,Value` row per exported field.
//!
//! Multi-valued fields are flattened (goals with `; `, tags with `, `) and
//! absent optional fields become empty cells. Every cell is quoted.

use crate::domain::{DashboardError, Initiative, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Header row written before the field rows.
pub const HEADER: [&str; 2] = ["Field", "Value"];

/// The fixed `(label, value)` rows for `record`, in export order.
#[must_use]
pub fn csv_rows(record: &Initiative) -> Vec<(&'static str, String)> {
    let optional = |text: &Option<String>| text.clone().unwrap_or_default();

    vec![
        ("ID", record.id.clone()),
        ("Title", record.title.clone()),
        ("Status", record.status.clone()),
        ("Priority", record.priority.clone()),
        ("Buy-in", record.buy_in.clone()),
        ("Focus Area", record.focus_area.clone()),
        ("Lead Agency", record.lead_agency.clone()),
        ("Vision", optional(&record.vision)),
        ("Rationale", optional(&record.rationale)),
        ("Goals", record.goals.join("; ")),
        ("Progress", format!("{}%", record.progress)),
        ("Project Status", record.metrics.project_status.clone()),
        ("Target Date", record.metrics.target_date.clone()),
        ("Budget", record.metrics.budget.clone()),
        ("Last Updated", record.metrics.last_update.clone()),
        ("Current Status", optional(&record.status_notes)),
        ("Tags", record.tags.join(", ")),
        ("Roadmap Origin", record.roadmap.origin.clone()),
        ("Roadmap Destination", record.roadmap.destination.clone()),
        ("Current Phase", record.roadmap.current_phase.clone()),
    ]
}

/// Serializes `record` as a two-column CSV document.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] if the CSV writer fails.
pub fn to_csv(record: &Initiative) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER).map_err(csv_error)?;
    for (label, value) in csv_rows(record) {
        writer.write_record([label, value.as_str()]).map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DashboardError::Export(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DashboardError::Export(format!("CSV is not UTF-8: {e}")))
}

fn csv_error(err: csv::Error) -> DashboardError {
    DashboardError::Export(format!("CSV write failed: {err}"))
}
