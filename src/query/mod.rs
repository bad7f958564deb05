//! Query engine: the pure half of the dashboard.
//!
//! Everything here is deterministic and side-effect free apart from tracing.
//! The [`Dashboard`](crate::app::Dashboard) owns a [`QueryState`] and calls
//! [`compile`] after every mutation.
//!
//! # Modules
//!
//! - [`facet`]: closed set of filterable facets and their predicates
//! - [`sort`]: sort keys, directions and comparators
//! - [`state`]: the mutable query (search, facet selections, sort)
//! - [`compiler`]: records + query → ordered view
//! - [`index`]: distinct facet values for populating filter choices

pub mod compiler;
pub mod facet;
pub mod index;
pub mod sort;
pub mod state;

pub use compiler::{compile, compile_positions};
pub use facet::{Facet, Field};
pub use index::{distinct_values, FacetIndex};
pub use sort::{SortDirection, SortKey};
pub use state::QueryState;
