//! Initiative domain model.
//!
//! An [`Initiative`] is one record of the catalog: a government initiative with
//! categorical attributes (status, priority, buy-in, ...), free-text sections,
//! an action plan, stakeholders, a roadmap and headline metrics. Records are
//! loaded once and never mutated afterwards; everything derived from them
//! (views, exports) works on borrowed data or fresh copies.
//!
//! Field names follow the catalog's camelCase wire format. Optional sections
//! are omitted on serialization when absent so that a JSON export reads back
//! into an identical record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status value counted as "active" in summary counts.
pub const STATUS_IN_PROGRESS: &str = "In Progress";

/// Status value counted as "planned" in summary counts.
pub const STATUS_PLANNED: &str = "Planned";

/// A single initiative record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    /// Unique, session-stable identifier (e.g. `INIT-2025-001`).
    pub id: String,
    pub title: String,
    pub focus_area: String,
    pub lead_agency: String,
    pub status: String,
    /// Completion percentage, 0 to 100 inclusive.
    pub progress: u8,
    pub priority: String,
    /// Stakeholder consensus, e.g. `Unified`, `Divergent`, `Blocked`.
    pub buy_in: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,

    pub goals: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_plan: Option<Vec<ActionItem>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_links: Option<Vec<ReferenceLink>>,

    pub stakeholders: Vec<Stakeholder>,
    pub tags: Vec<String>,
    pub roadmap: Roadmap,
    pub metrics: Metrics,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_notes: Option<String>,
}

/// One dated step of an initiative's action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub quarter: String,
    pub action: String,
    pub status: String,
}

/// External reference attached to an initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLink {
    pub title: String,
    pub url: String,
}

/// A party involved in an initiative. Names feed the `stakeholderName` facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
}

/// Where an initiative started, where it is heading, and the phase it is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub origin: String,
    pub destination: String,
    pub current_phase: String,
    pub milestones: Vec<String>,
}

/// Headline metrics shown on cards and in exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub project_status: String,
    pub target_date: String,
    /// Calendar date of the last update, normally `YYYY-MM-DD`.
    pub last_update: String,
    pub budget: String,
}

/// Completion state of a single roadmap milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneState<'a> {
    pub name: &'a str,
    pub completed: bool,
}

impl Initiative {
    /// Returns the rank used by priority sorting.
    ///
    /// `Critical` = 4, `High` = 3, `Medium` = 2, `Low` = 1; any other value
    /// ranks 0 and therefore sorts below every known priority.
    #[must_use]
    pub fn priority_rank(&self) -> u8 {
        match self.priority.as_str() {
            "Critical" => 4,
            "High" => 3,
            "Medium" => 2,
            "Low" => 1,
            _ => 0,
        }
    }

    /// Action plan entries, empty when the record has none.
    #[must_use]
    pub fn action_plan(&self) -> &[ActionItem] {
        self.action_plan.as_deref().unwrap_or_default()
    }

    /// Reference links, empty when the record has none.
    #[must_use]
    pub fn reference_links(&self) -> &[ReferenceLink] {
        self.reference_links.as_deref().unwrap_or_default()
    }

    /// Iterates over the names of all stakeholders in record order.
    pub fn stakeholder_names(&self) -> impl Iterator<Item = &str> {
        self.stakeholders.iter().map(|s| s.name.as_str())
    }
}

impl Roadmap {
    /// Position of `current_phase` within `milestones`, if present.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.milestones.iter().position(|m| m == &self.current_phase)
    }

    /// Marks each milestone as completed when its index is at or before the
    /// current phase.
    ///
    /// A `current_phase` that does not appear in `milestones` behaves like
    /// index -1: no milestone is completed.
    #[must_use]
    pub fn milestone_states(&self) -> Vec<MilestoneState<'_>> {
        let current = self.current_index();
        self.milestones
            .iter()
            .enumerate()
            .map(|(idx, name)| MilestoneState {
                name,
                completed: current.is_some_and(|c| idx <= c),
            })
            .collect()
    }

    /// Number of milestones completed.
    #[must_use]
    pub fn completed_milestones(&self) -> usize {
        self.current_index().map_or(0, |c| c + 1)
    }
}

impl Metrics {
    /// Parses `last_update` as a calendar date.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 timestamps (date part only).
    /// Returns `None` for anything else.
    #[must_use]
    pub fn last_update_date(&self) -> Option<NaiveDate> {
        let raw = self.last_update.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                chrono::DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::bare;
    use super::*;

    #[test]
    fn priority_rank_orders_known_values_and_sinks_unknown() {
        let mut record = bare("A", "a");
        let ranks: Vec<u8> = ["Critical", "High", "Medium", "Low", "Someday"]
            .iter()
            .map(|p| {
                record.priority = (*p).to_string();
                record.priority_rank()
            })
            .collect();
        assert_eq!(ranks, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn milestones_complete_up_to_current_phase() {
        let roadmap = Roadmap {
            origin: "EO".into(),
            destination: "Integration".into(),
            current_phase: "Team Formation".into(),
            milestones: vec![
                "EO Signed".into(),
                "Team Formation".into(),
                "Pilot Programs".into(),
            ],
        };
        let done: Vec<bool> = roadmap.milestone_states().iter().map(|m| m.completed).collect();
        assert_eq!(done, vec![true, true, false]);
        assert_eq!(roadmap.completed_milestones(), 2);
    }

    #[test]
    fn unknown_current_phase_completes_nothing() {
        let roadmap = Roadmap {
            origin: "Concept Phase".into(),
            destination: "Full Implementation".into(),
            current_phase: "Legislative Draft".into(),
            milestones: vec!["Concept".into(), "Draft".into(), "Review".into()],
        };
        assert!(roadmap.milestone_states().iter().all(|m| !m.completed));
        assert_eq!(roadmap.completed_milestones(), 0);
    }

    #[test]
    fn last_update_accepts_plain_and_rfc3339_dates() {
        let mut metrics = bare("A", "a").metrics;
        assert_eq!(metrics.last_update_date(), NaiveDate::from_ymd_opt(2025, 1, 1));

        metrics.last_update = "2025-02-03T10:00:00Z".into();
        assert_eq!(metrics.last_update_date(), NaiveDate::from_ymd_opt(2025, 2, 3));

        metrics.last_update = "last tuesday".into();
        assert_eq!(metrics.last_update_date(), None);
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let json = serde_json::to_value(bare("A", "a")).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("vision"));
        assert!(!obj.contains_key("actionPlan"));
        assert!(obj.contains_key("focusArea"));
        assert!(obj.contains_key("buyIn"));
    }
}
