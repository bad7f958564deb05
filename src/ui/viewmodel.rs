//! View models representing renderable dashboard state.
//!
//! View models are computed from a [`Dashboard`] or a single record and
//! consumed by the [`renderer`](super::renderer). They hold display-ready data
//! only: truncated titles, search highlight ranges, filter chips, milestone
//! progress.
//!
//! # Example
//!
//! ```rust
//! use cohesivegov::app::Dashboard;
//! use cohesivegov::storage::JsonSource;
//! use cohesivegov::ui::ListViewModel;
//!
//! let mut dashboard = Dashboard::from_source(&JsonSource::sample())?;
//! dashboard.set_search("doge");
//! let vm = ListViewModel::from_dashboard(&dashboard);
//! assert_eq!(vm.cards.len(), 1);
//! assert_eq!(vm.cards[0].highlight_ranges, vec![(37, 41)]);
//! # Ok::<(), cohesivegov::DashboardError>(())
//! ```

use crate::app::{Dashboard, Summary};
use crate::domain::Initiative;
use crate::export::report::{Report, Section};

/// Titles longer than this are cut and suffixed with `...`.
const TITLE_WIDTH: usize = 48;

/// The result list with its header, summary and active filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub header: HeaderInfo,
    pub summary: Summary,
    pub search_bar: Option<SearchBarInfo>,
    pub active_filters: Vec<FilterChip>,
    pub cards: Vec<CardItem>,
    /// Set when the result list is empty.
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub sort: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// One removable active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub facet: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// One initiative in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub buy_in: String,
    pub lead_agency: String,
    pub progress: u8,
    pub last_update: String,
    /// Search matches in `title`, as half-open char ranges.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl ListViewModel {
    #[must_use]
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let query = dashboard.query();
        let snapshot = dashboard.snapshot();
        let needle: Vec<char> = query.search_query().to_lowercase().chars().collect();

        let cards: Vec<CardItem> = snapshot
            .results
            .iter()
            .map(|record| card_item(record, &needle))
            .collect();

        let empty_state = cards.is_empty().then(|| {
            let subtitle = if query.has_active_filters() || !query.search_query().is_empty() {
                "Try clearing filters or changing the search."
            } else {
                "The catalog is empty."
            };
            EmptyState {
                message: "No initiatives match".to_string(),
                subtitle: subtitle.to_string(),
            }
        });

        Self {
            header: HeaderInfo {
                title: format!(
                    " Initiatives ({} of {}) ",
                    snapshot.summary.total,
                    dashboard.store().len()
                ),
                sort: format!("{} {}", query.sort_key(), query.sort_direction()),
            },
            summary: snapshot.summary,
            search_bar: (!query.search_query().is_empty()).then(|| SearchBarInfo {
                query: query.search_query().to_string(),
            }),
            active_filters: query
                .active_filters()
                .into_iter()
                .map(|(facet, value)| FilterChip {
                    facet: facet.label(),
                    value: value.to_string(),
                })
                .collect(),
            cards,
            empty_state,
        }
    }
}

fn card_item(record: &Initiative, needle: &[char]) -> CardItem {
    let title = truncate(&record.title, TITLE_WIDTH);
    let visible = if title == record.title { title.chars().count() } else { TITLE_WIDTH - 3 };
    let highlight_ranges = highlight_ranges(&record.title, needle)
        .into_iter()
        .filter(|&(_, end)| end <= visible)
        .collect();

    CardItem {
        id: record.id.clone(),
        title,
        status: record.status.clone(),
        priority: record.priority.clone(),
        buy_in: record.buy_in.clone(),
        lead_agency: record.lead_agency.clone(),
        progress: record.progress,
        last_update: record.metrics.last_update.clone(),
        highlight_ranges,
    }
}

/// Non-overlapping case-insensitive occurrences of `needle` in `text`.
fn highlight_ranges(text: &str, needle: &[char]) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }
    let chars: Vec<char> = text.chars().collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start + needle.len() <= chars.len() {
        let matched = chars[start..start + needle.len()]
            .iter()
            .zip(needle)
            .all(|(c, n)| c.to_lowercase().eq(std::iter::once(*n)));
        if matched {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width - 3).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

/// Full view of one initiative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailViewModel {
    pub title: String,
    pub subtitle: String,
    pub progress: u8,
    pub badges: Vec<(&'static str, String)>,
    pub roadmap: RoadmapInfo,
    pub stakeholders: Vec<(String, String)>,
    pub sections: Vec<DetailSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapInfo {
    pub origin: String,
    pub destination: String,
    pub milestones: Vec<MilestoneItem>,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneItem {
    pub name: String,
    pub completed: bool,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

impl DetailViewModel {
    #[must_use]
    pub fn from_record(record: &Initiative) -> Self {
        let report = Report::from_record(record);
        let roadmap = &record.roadmap;

        Self {
            title: record.title.clone(),
            subtitle: format!("{}  ·  {}", record.id, record.status),
            progress: record.progress,
            badges: vec![
                ("Priority", record.priority.clone()),
                ("Buy-in", record.buy_in.clone()),
                ("Focus Area", record.focus_area.clone()),
                ("Lead Agency", record.lead_agency.clone()),
                ("Project Status", record.metrics.project_status.clone()),
                ("Target Date", record.metrics.target_date.clone()),
                ("Budget", record.metrics.budget.clone()),
                ("Last Updated", record.metrics.last_update.clone()),
            ],
            roadmap: RoadmapInfo {
                origin: roadmap.origin.clone(),
                destination: roadmap.destination.clone(),
                milestones: roadmap
                    .milestone_states()
                    .into_iter()
                    .map(|state| MilestoneItem {
                        name: state.name.to_string(),
                        completed: state.completed,
                        is_current: state.name == roadmap.current_phase,
                    })
                    .collect(),
                completed: roadmap.completed_milestones(),
            },
            stakeholders: record
                .stakeholders
                .iter()
                .map(|s| (s.name.clone(), s.role.clone()))
                .collect(),
            sections: report
                .sections
                .iter()
                .map(|section| DetailSection {
                    heading: section.heading(),
                    lines: section_lines(section),
                })
                .collect(),
        }
    }
}

fn section_lines(section: &Section<'_>) -> Vec<String> {
    match section {
        Section::Vision(text) | Section::StartingPoint(text) => vec![(*text).to_string()],
        Section::Goals(goals) => goals
            .iter()
            .enumerate()
            .map(|(idx, goal)| format!("{}. {goal}", idx + 1))
            .collect(),
        Section::ActionPlan(items) => items
            .iter()
            .map(|item| format!("{}: {} [{}]", item.quarter, item.action, item.status))
            .collect(),
        Section::CurrentStatus { notes, .. } => vec![(*notes).to_string()],
        Section::Tags(tags) => vec![tags.join(" · ")],
        Section::ReferenceLinks(links) => links
            .iter()
            .map(|link| format!("{} <{}>", link.title, link.url))
            .collect(),
    }
}
