//! Tracing initialization and subscriber setup.
//!
//! Builds the pipeline from `tracing` macros to the span file, plus an
//! optional human-readable stderr layer.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `trace_level` is set.
pub const DEFAULT_LEVEL: &str = "info";

/// Span file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "cohesivegov-traces.jsonl";

/// Where finished spans are written.
#[must_use]
pub fn trace_file() -> PathBuf {
    paths::data_dir().join(TRACE_FILE_NAME)
}

/// Installs the global subscriber.
///
/// Filter priority: `RUST_LOG`, then `config.trace_level`, then
/// [`DEFAULT_LEVEL`]. With `verbose` set, events are also formatted to
/// stderr. If the data directory cannot be created only the stderr layer is
/// installed. Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(config: &Config, verbose: bool) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = verbose.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let otel_layer = std::fs::create_dir_all(paths::data_dir()).ok().map(|()| {
        let resource = Resource::new(vec![KeyValue::new("service.name", "cohesivegov")]);
        let provider = exporter::create_tracer_provider(trace_file(), resource);
        OpenTelemetryLayer::new(provider.tracer("cohesivegov"))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(stderr_layer)
        .try_init();
}
