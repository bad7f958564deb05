//! Domain layer: the initiative record model and the crate error type.
//!
//! Nothing in here knows about querying, exporting or the command line; the
//! types are plain data with a few derived read-only helpers.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`initiative`]: Initiative record and its nested sub-entities

pub mod error;
pub mod initiative;

pub use error::{DashboardError, Result};
pub use initiative::{
    ActionItem, Initiative, Metrics, MilestoneState, ReferenceLink, Roadmap, Stakeholder,
    STATUS_IN_PROGRESS, STATUS_PLANNED,
};
