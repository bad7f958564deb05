//! Infrastructure layer for filesystem and environment interactions.
//!
//! Platform directory lookup and export file placement live here so that
//! nothing above this layer deals with `dirs` or path joining rules.

pub mod paths;

pub use paths::{config_file, data_dir, default_export_dir, expand_tilde, export_path};
