//! File span exporter for the OpenTelemetry SDK.
//!
//! Each finished span becomes one flat JSON object on its own line:
//!
//! ```json
//! {"traceId":"…","spanId":"…","parentSpanId":"","name":"compile_view",
//!  "start":"2025-01-15T09:30:00.000120Z","durationUs":84,
//!  "attributes":{"total_records":6,"sort_key":"lastUpdate"},"status":"unset"}
//! ```

use super::file_writer::RotatingFile;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

struct JsonLinesExporter {
    file: RotatingFile,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    const fn new(path: PathBuf) -> Self {
        Self {
            file: RotatingFile::new(path),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        for span in batch {
            self.file
                .write_line(&span_record(span).to_string())
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("span exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that writes every finished span to `path`.
#[must_use]
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(JsonLinesExporter::new(path))
        .build()
}

fn span_record(span: &SpanData) -> JsonValue {
    let start: DateTime<Utc> = span.start_time.into();
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "start": start.to_rfc3339_opts(SecondsFormat::Micros, true),
        "durationUs": duration_us,
        "attributes": attributes(&span.attributes),
        "status": status(&span.status),
    })
}

fn attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn status(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}
