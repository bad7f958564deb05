//! Sort keys and directions for the derived view.

use crate::domain::Initiative;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Attribute the derived view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// `metrics.lastUpdate` compared as a calendar date.
    #[default]
    LastUpdate,
    Progress,
    /// Case-folded lexicographic title order.
    Title,
    /// Critical > High > Medium > Low > anything else.
    Priority,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::LastUpdate, Self::Progress, Self::Title, Self::Priority];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LastUpdate => "lastUpdate",
            Self::Progress => "progress",
            Self::Title => "title",
            Self::Priority => "priority",
        }
    }

    /// Ascending comparison of two records under this key.
    ///
    /// Unparsable `lastUpdate` values compare as earlier than any real date and
    /// equal to each other; the comparison never panics.
    #[must_use]
    pub fn compare(self, a: &Initiative, b: &Initiative) -> Ordering {
        match self {
            Self::LastUpdate => a
                .metrics
                .last_update_date()
                .cmp(&b.metrics.last_update_date()),
            Self::Progress => a.progress.cmp(&b.progress),
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::Priority => a.priority_rank().cmp(&b.priority_rank()),
        }
    }
}

impl SortDirection {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Orients an ascending comparison. Ties stay ties.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|k| k.key().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!("unknown sort key '{s}' (expected lastUpdate, progress, title or priority)")
            })
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(format!("unknown sort direction '{s}' (expected asc or desc)")),
        }
    }
}
