//! Storage layer: where the catalog comes from and where it lives in memory.
//!
//! # Modules
//!
//! - `backend`: [`RecordSource`] trait for catalog sources
//! - `json`: JSON catalog source (file or in-memory, plus the bundled sample)
//! - `store`: immutable in-memory [`RecordStore`] with id lookup

pub mod backend;
pub mod json;
pub mod store;

pub use backend::RecordSource;
pub use json::JsonSource;
pub use store::RecordStore;
