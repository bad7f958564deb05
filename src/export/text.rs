//! Plain-text report export.
//!
//! The layout is a fixed template: title, `id  ·  status`, then each report
//! section as an upper-case heading followed by its body, a heavy rule, the
//! metadata block and the export timestamp. Every block is separated by one
//! blank line.

use super::report::{Report, Section};
use crate::domain::Initiative;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

/// Width of the rule separating the body from the metadata block.
const RULE_WIDTH: usize = 72;

/// Renders the plain-text report for `record`.
#[must_use]
pub fn to_text(record: &Initiative, exported_at: &DateTime<Utc>) -> String {
    render(&Report::from_record(record), exported_at)
}

/// Renders an already-built report.
#[must_use]
pub fn render(report: &Report<'_>, exported_at: &DateTime<Utc>) -> String {
    let mut out = String::new();

    out.push_str(report.title);
    out.push_str("\n\n");
    let _ = write!(out, "{}  ·  {}\n\n", report.id, report.status);

    for section in &report.sections {
        out.push_str(section.heading());
        out.push_str("\n\n");
        out.push_str(&section_body(section));
        out.push_str("\n\n");
    }

    out.push_str(&"━".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    for (label, value) in &report.metadata {
        let _ = writeln!(out, "{label}: {value}");
    }

    let _ = writeln!(
        out,
        "\nExported on {} at {}",
        exported_at.format("%Y-%m-%d"),
        exported_at.format("%H:%M:%S")
    );

    out
}

fn section_body(section: &Section<'_>) -> String {
    match section {
        Section::Vision(text) | Section::StartingPoint(text) => (*text).to_string(),
        Section::Goals(goals) => goals
            .iter()
            .enumerate()
            .map(|(idx, goal)| format!("{}. {goal}", idx + 1))
            .collect::<Vec<_>>()
            .join("\n"),
        Section::ActionPlan(items) => items
            .iter()
            .map(|item| format!("  {}: {} [{}]", item.quarter, item.action, item.status))
            .collect::<Vec<_>>()
            .join("\n"),
        Section::CurrentStatus { notes, progress } => format!("{notes}\n\nProgress: {progress}%"),
        Section::Tags(tags) => tags.join(" · "),
        Section::ReferenceLinks(links) => links
            .iter()
            .map(|link| format!("  - {}\n    {}", link.title, link.url))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}
