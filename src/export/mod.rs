//! Export serializers: one record in, one self-contained payload out.
//!
//! Every serializer reads a single borrowed record plus a caller-supplied
//! timestamp, so exports never touch shared state and are reproducible in
//! tests.
//!
//! # Modules
//!
//! - [`report`]: section selection and order shared by text and print
//! - [`text`]: plain-text report
//! - [`json`]: lossless JSON with an `exportedOn` stamp
//! - [`csv`]: two-column `Field,Value` table
//! - [`print`]: print-ready document rendered to HTML

pub mod csv;
pub mod json;
pub mod print;
pub mod report;
pub mod text;

pub use print::PrintDocument;
pub use report::{Report, Section};

use crate::domain::{DashboardError, Initiative, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Output encoding of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
    Print,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Text, Self::Json, Self::Csv, Self::Print];

    /// File extension used when the payload is persisted.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Print => "html",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Print => "print",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "print" | "html" => Ok(Self::Print),
            other => Err(DashboardError::Config(format!(
                "unknown export format '{other}' (expected text, json, csv or print)"
            ))),
        }
    }
}

/// A serialized record ready to be written to disk or handed to a viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub format: ExportFormat,
    pub file_name: String,
    pub content: String,
}

/// Serializes `record` into `format`.
///
/// # Errors
///
/// Returns [`DashboardError::Export`] if the JSON or CSV writer fails. Text
/// and print exports cannot fail.
pub fn export(
    record: &Initiative,
    format: ExportFormat,
    exported_at: &DateTime<Utc>,
) -> Result<ExportPayload> {
    let _span = tracing::debug_span!("export_record",
        id = %record.id,
        format = %format
    ).entered();

    let content = match format {
        ExportFormat::Text => text::to_text(record, exported_at),
        ExportFormat::Json => json::to_json(record, exported_at)?,
        ExportFormat::Csv => self::csv::to_csv(record)?,
        ExportFormat::Print => PrintDocument::from_record(record, exported_at).to_html(),
    };

    tracing::debug!(bytes = content.len(), "export rendered");
    Ok(ExportPayload {
        format,
        file_name: file_name(record, format),
        content,
    })
}

/// Lowercases `title` after replacing every non-ASCII-alphanumeric character
/// with `_`.
#[must_use]
pub fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// `{id}_{slug(title)}.{extension}`
#[must_use]
pub fn file_name(record: &Initiative, format: ExportFormat) -> String {
    format!("{}_{}.{}", record.id, slug(&record.title), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::initiative::fixtures::bare;
    use chrono::TimeZone;

    #[test]
    fn slug_replaces_each_non_alphanumeric_character() {
        assert_eq!(slug("Department of Government Efficiency (DOGE)"),
            "department_of_government_efficiency__doge_");
        assert_eq!(slug("Dismantle DEI Act"), "dismantle_dei_act");
        assert_eq!(slug("Café"), "caf_");
    }

    #[test]
    fn file_name_uses_format_extension() {
        let record = bare("INIT-2025-001", "Dismantle DEI Act");
        let names: Vec<String> = ExportFormat::ALL.iter().map(|f| file_name(&record, *f)).collect();
        assert_eq!(
            names,
            vec![
                "INIT-2025-001_dismantle_dei_act.txt",
                "INIT-2025-001_dismantle_dei_act.json",
                "INIT-2025-001_dismantle_dei_act.csv",
                "INIT-2025-001_dismantle_dei_act.html",
            ]
        );
    }

    #[test]
    fn format_parses_loosely() {
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!(" print ".parse::<ExportFormat>().unwrap(), ExportFormat::Print);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn export_does_not_touch_the_record() {
        let record = bare("A", "a");
        let before = record.clone();
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        for format in ExportFormat::ALL {
            let payload = export(&record, format, &at).unwrap();
            assert_eq!(payload.format, format);
            assert!(!payload.content.is_empty());
        }
        assert_eq!(record, before);
    }
}
