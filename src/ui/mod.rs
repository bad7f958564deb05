//! Terminal presentation layer.
//!
//! ```text
//! Dashboard → ListViewModel / DetailViewModel → render_* → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready projections of the dashboard and records
//! - [`renderer`]: plain-text rendering with optional ANSI styling

pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_detail, render_facet_values, render_list, Style};
pub use viewmodel::{
    CardItem, DetailViewModel, EmptyState, FilterChip, HeaderInfo, ListViewModel, SearchBarInfo,
};
