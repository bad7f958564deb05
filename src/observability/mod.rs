//! OpenTelemetry-based observability with file span export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → JSON lines file
//! ```
//!
//! - Spans are written to `<data dir>/cohesivegov/cohesivegov-traces.jsonl`
//! - The file rotates at 10MB and keeps 3 backups
//! - Level comes from `RUST_LOG`, then the `trace_level` config key, then `info`
//!
//! # Usage
//!
//! ```rust,no_run
//! use cohesivegov::observability::init_tracing;
//! use cohesivegov::Config;
//!
//! init_tracing(&Config::default(), false);
//! tracing::debug!("dashboard starting");
//! ```
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: span exporter and tracer provider
//! - `file_writer`: rotating line writer

mod exporter;
mod file_writer;
mod init;

pub use init::{init_tracing, trace_file};
