//! Error types for cohesivegov.
//!
//! This module defines the centralized error type [`DashboardError`] and a type
//! alias [`Result`] used throughout the crate. Lookups of unknown ids are not
//! errors: they are reported as `None` by the lookup and export APIs.

use thiserror::Error;

/// The main error type for catalog loading, exporting and configuration.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The record source produced no initiative at all.
    ///
    /// Raised by the source, never by the record store, so the caller can
    /// report "no data" instead of showing an empty dashboard.
    #[error("no initiative records found in {0}")]
    EmptySource(String),

    /// A record is missing required fields or has the wrong shape.
    ///
    /// `index` is the zero-based position of the record in the source.
    #[error("malformed initiative record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },

    /// Two records in the source share the same id.
    #[error("duplicate initiative id: {0}")]
    DuplicateId(String),

    /// The source could not be parsed as a catalog.
    #[error("Source error: {0}")]
    Source(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A serializer failed to produce its payload.
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for cohesivegov operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
