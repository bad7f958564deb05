//! Facet identifiers and their matching predicates.
//!
//! A facet is a categorical attribute a user can filter on. The set is closed:
//! five facets compare one scalar field of the record, and `stakeholderName`
//! tests membership across the record's one-to-many stakeholder list.

use crate::domain::Initiative;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Scalar record fields that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Status,
    FocusArea,
    LeadAgency,
    Priority,
    BuyIn,
}

impl Field {
    /// Projects the field's value out of a record.
    #[must_use]
    pub fn value(self, record: &Initiative) -> &str {
        match self {
            Self::Status => &record.status,
            Self::FocusArea => &record.focus_area,
            Self::LeadAgency => &record.lead_agency,
            Self::Priority => &record.priority,
            Self::BuyIn => &record.buy_in,
        }
    }
}

/// A filterable facet.
///
/// Facets order as they are listed here, which is also the order active filters
/// are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Facet {
    /// Single-valued field: the record matches if its value is selected.
    Field(Field),
    /// Matches if any of the record's stakeholder names is selected.
    StakeholderName,
}

impl Facet {
    pub const STATUS: Self = Self::Field(Field::Status);
    pub const FOCUS_AREA: Self = Self::Field(Field::FocusArea);
    pub const LEAD_AGENCY: Self = Self::Field(Field::LeadAgency);
    pub const PRIORITY: Self = Self::Field(Field::Priority);
    pub const BUY_IN: Self = Self::Field(Field::BuyIn);

    /// Number of facets.
    pub const COUNT: usize = 6;

    /// Every facet, in display order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::STATUS,
        Self::FOCUS_AREA,
        Self::LEAD_AGENCY,
        Self::PRIORITY,
        Self::BUY_IN,
        Self::StakeholderName,
    ];

    /// Dense position of the facet within [`Facet::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Field(Field::Status) => 0,
            Self::Field(Field::FocusArea) => 1,
            Self::Field(Field::LeadAgency) => 2,
            Self::Field(Field::Priority) => 3,
            Self::Field(Field::BuyIn) => 4,
            Self::StakeholderName => 5,
        }
    }

    /// Wire/CLI key, matching the catalog's field names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Field(Field::Status) => "status",
            Self::Field(Field::FocusArea) => "focusArea",
            Self::Field(Field::LeadAgency) => "leadAgency",
            Self::Field(Field::Priority) => "priority",
            Self::Field(Field::BuyIn) => "buyIn",
            Self::StakeholderName => "stakeholderName",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Field(Field::Status) => "Status",
            Self::Field(Field::FocusArea) => "Focus Area",
            Self::Field(Field::LeadAgency) => "Lead Agency",
            Self::Field(Field::Priority) => "Priority",
            Self::Field(Field::BuyIn) => "Buy-in",
            Self::StakeholderName => "Stakeholder",
        }
    }

    /// Returns `true` if `record` satisfies this facet for the selected values.
    ///
    /// Values within one facet combine with OR. An empty selection is inactive
    /// and matches everything.
    #[must_use]
    pub fn matches(self, record: &Initiative, selected: &BTreeSet<String>) -> bool {
        if selected.is_empty() {
            return true;
        }
        match self {
            Self::Field(field) => selected.contains(field.value(record)),
            Self::StakeholderName => record.stakeholder_names().any(|name| selected.contains(name)),
        }
    }

    /// Every value the record carries for this facet.
    #[must_use]
    pub fn values_of(self, record: &Initiative) -> Vec<&str> {
        match self {
            Self::Field(field) => vec![field.value(record)],
            Self::StakeholderName => record.stakeholder_names().collect(),
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Facet {
    type Err = String;

    /// Accepts the camelCase key (`buyIn`), case-insensitively, with `-` and
    /// `_` ignored so `buy-in` and `lead_agency` work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|facet| facet.key().to_lowercase() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|f| f.key()).collect();
                format!("unknown facet '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        facet.key().to_string()
    }
}

impl TryFrom<String> for Facet {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
