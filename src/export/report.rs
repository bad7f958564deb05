//! Report structure shared by the text and print exports.
//!
//! A [`Report`] selects which parts of a record are exported and in what
//! order. Both the plain-text template and the print document are rendered
//! from it, so the two can never disagree on section order. Optional record
//! sections (vision, rationale, action plan, reference links) are simply left
//! out when absent or empty.

use crate::domain::{ActionItem, Initiative, ReferenceLink};

/// Shown under CURRENT STATUS when a record has no status notes.
pub const NO_STATUS_NOTES: &str = "No status updates available.";

/// One titled block of the report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<'a> {
    Vision(&'a str),
    StartingPoint(&'a str),
    Goals(&'a [String]),
    ActionPlan(&'a [ActionItem]),
    CurrentStatus { notes: &'a str, progress: u8 },
    Tags(&'a [String]),
    ReferenceLinks(&'a [ReferenceLink]),
}

impl Section<'_> {
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Vision(_) => "VISION",
            Self::StartingPoint(_) => "STARTING POINT",
            Self::Goals(_) => "GOALS",
            Self::ActionPlan(_) => "ACTION PLAN",
            Self::CurrentStatus { .. } => "CURRENT STATUS",
            Self::Tags(_) => "TAGS",
            Self::ReferenceLinks(_) => "REFERENCE LINKS",
        }
    }
}

/// Ordered export view of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<'a> {
    pub title: &'a str,
    pub id: &'a str,
    pub status: &'a str,
    pub sections: Vec<Section<'a>>,
    /// Trailing `label: value` block.
    pub metadata: Vec<(&'static str, &'a str)>,
}

impl<'a> Report<'a> {
    /// Selects and orders the exported parts of `record`.
    #[must_use]
    pub fn from_record(record: &'a Initiative) -> Self {
        let mut sections = Vec::with_capacity(7);

        if let Some(vision) = non_empty(record.vision.as_deref()) {
            sections.push(Section::Vision(vision));
        }
        if let Some(rationale) = non_empty(record.rationale.as_deref()) {
            sections.push(Section::StartingPoint(rationale));
        }
        sections.push(Section::Goals(&record.goals));
        if !record.action_plan().is_empty() {
            sections.push(Section::ActionPlan(record.action_plan()));
        }
        sections.push(Section::CurrentStatus {
            notes: non_empty(record.status_notes.as_deref()).unwrap_or(NO_STATUS_NOTES),
            progress: record.progress,
        });
        sections.push(Section::Tags(&record.tags));
        if !record.reference_links().is_empty() {
            sections.push(Section::ReferenceLinks(record.reference_links()));
        }

        Self {
            title: &record.title,
            id: &record.id,
            status: &record.status,
            sections,
            metadata: vec![
                ("Lead Agency", record.lead_agency.as_str()),
                ("Priority", record.priority.as_str()),
                ("Buy-in", record.buy_in.as_str()),
                ("Target Date", record.metrics.target_date.as_str()),
                ("Budget", record.metrics.budget.as_str()),
                ("Last Updated", record.metrics.last_update.as_str()),
            ],
        }
    }

    /// Section headings in report order.
    #[must_use]
    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::heading).collect()
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
