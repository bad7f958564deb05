//! Application layer: the dashboard, its events and the actions it emits.
//!
//! This layer sits between the host (the CLI in `main.rs`) and the
//! query/export layers. It follows a unidirectional flow:
//!
//! ```text
//! Host input → Event → handle_event → Dashboard mutation → Actions → Host side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing
//! - [`state`]: [`Dashboard`], the owner of store, query and derived view

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{Dashboard, Summary, ViewSnapshot};
