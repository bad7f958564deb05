//! Plain-text rendering of view models.
//!
//! Each `render_*` function returns the full text instead of printing, so the
//! host decides where it goes. ANSI styling is applied only when the
//! [`Style`] is enabled.

use super::viewmodel::{CardItem, DetailViewModel, ListViewModel};
use std::collections::BTreeSet;
use std::fmt::Write as _;

const PROGRESS_BAR_WIDTH: usize = 20;

/// ANSI escape sequences, or empty strings when styling is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    enabled: bool,
}

impl Style {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn bold(self) -> &'static str {
        if self.enabled { "\u{001b}[1m" } else { "" }
    }

    #[must_use]
    pub const fn dim(self) -> &'static str {
        if self.enabled { "\u{001b}[2m" } else { "" }
    }

    /// Search match highlight (yellow, bold).
    #[must_use]
    pub const fn highlight(self) -> &'static str {
        if self.enabled { "\u{001b}[1;33m" } else { "" }
    }

    #[must_use]
    pub const fn reset(self) -> &'static str {
        if self.enabled { "\u{001b}[0m" } else { "" }
    }
}

/// Renders the result list: header, search, filter chips, cards, summary.
#[must_use]
pub fn render_list(vm: &ListViewModel, style: Style) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}{}{}  {}sorted by {}{}",
        style.bold(),
        vm.header.title,
        style.reset(),
        style.dim(),
        vm.header.sort,
        style.reset()
    );

    if let Some(search) = &vm.search_bar {
        let _ = writeln!(out, "Search: \"{}\"", search.query);
    }

    if !vm.active_filters.is_empty() {
        let chips: Vec<String> = vm
            .active_filters
            .iter()
            .map(|chip| format!("[{}: {} x]", chip.facet, chip.value))
            .collect();
        let _ = writeln!(out, "Filters: {}", chips.join(" "));
    }
    out.push('\n');

    if let Some(empty) = &vm.empty_state {
        let _ = writeln!(out, "  {}", empty.message);
        let _ = writeln!(out, "  {}{}{}", style.dim(), empty.subtitle, style.reset());
        return out;
    }

    for card in &vm.cards {
        render_card(&mut out, card, style);
    }

    let _ = writeln!(
        out,
        "{} total  ·  {} in progress  ·  {} planned",
        vm.summary.total, vm.summary.in_progress, vm.summary.planned
    );
    out
}

fn render_card(out: &mut String, card: &CardItem, style: Style) {
    let _ = write!(out, "{}{:<14}{} ", style.bold(), card.id, style.reset());
    out.push_str(&highlighted(&card.title, &card.highlight_ranges, style));
    out.push('\n');
    let _ = writeln!(
        out,
        "    {} | {} priority | buy-in {} | {} | updated {}",
        card.status, card.priority, card.buy_in, card.lead_agency, card.last_update
    );
    let _ = writeln!(out, "    {}", progress_bar(card.progress));
    out.push('\n');
}

/// Wraps each char range of `text` in highlight escapes.
fn highlighted(text: &str, ranges: &[(usize, usize)], style: Style) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut ranges = ranges.iter().peekable();

    for (idx, c) in text.chars().enumerate() {
        if ranges.peek().is_some_and(|&&(start, _)| idx == start) {
            out.push_str(style.highlight());
        }
        out.push(c);
        if ranges.peek().is_some_and(|&&(_, end)| idx + 1 == end) {
            out.push_str(style.reset());
            ranges.next();
        }
    }
    out
}

fn progress_bar(progress: u8) -> String {
    let filled = usize::from(progress.min(100)) * PROGRESS_BAR_WIDTH / 100;
    format!(
        "[{}{}] {progress}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

/// Renders the full detail of one initiative.
#[must_use]
pub fn render_detail(vm: &DetailViewModel, style: Style) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}{}{}", style.bold(), vm.title, style.reset());
    let _ = writeln!(out, "{}\n", vm.subtitle);
    let _ = writeln!(out, "{}\n", progress_bar(vm.progress));

    for (label, value) in &vm.badges {
        let _ = writeln!(out, "{label:<15} {value}");
    }
    out.push('\n');

    let roadmap = &vm.roadmap;
    let _ = writeln!(
        out,
        "{}ROADMAP{}  {} → {}  ({}/{} milestones)",
        style.bold(),
        style.reset(),
        roadmap.origin,
        roadmap.destination,
        roadmap.completed,
        roadmap.milestones.len()
    );
    for milestone in &roadmap.milestones {
        let mark = if milestone.completed { "x" } else { " " };
        let current = if milestone.is_current { "  ← current" } else { "" };
        let _ = writeln!(out, "  [{mark}] {}{current}", milestone.name);
    }
    out.push('\n');

    if !vm.stakeholders.is_empty() {
        let _ = writeln!(out, "{}STAKEHOLDERS{}", style.bold(), style.reset());
        for (name, role) in &vm.stakeholders {
            let _ = writeln!(out, "  {name} ({role})");
        }
        out.push('\n');
    }

    for section in &vm.sections {
        let _ = writeln!(out, "{}{}{}", style.bold(), section.heading, style.reset());
        for line in &section.lines {
            let _ = writeln!(out, "  {line}");
        }
        out.push('\n');
    }

    out
}

/// Renders the selectable values of one facet, one per line.
#[must_use]
pub fn render_facet_values(label: &str, values: &BTreeSet<String>, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}{label}{} ({})", style.bold(), style.reset(), values.len());
    for value in values {
        let _ = writeln!(out, "  {value}");
    }
    out
}
