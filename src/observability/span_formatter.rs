//! OTLP JSON encoding of exported spans.
//!
//! Each batch becomes one self-contained `resourceSpans` document, so every
//! line of the trace file can be fed to an OTLP/JSON consumer on its own:
//!
//! ```json
//! {"resourceSpans":[{
//!   "resource":{"attributes":[{"key":"service.name","value":{"stringValue":"product-manager"}}]},
//!   "scopeSpans":[{"scope":{"name":"product-manager"},"spans":[...]}]
//! }]}
//! ```

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Formats span batches under a fixed resource and instrumentation scope.
pub struct SpanFormatter {
    resource: Resource,
    scope: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope: &'static str) -> Self {
        Self { resource, scope }
    }

    pub fn set_resource(&mut self, resource: Resource) {
        self.resource = resource;
    }

    /// Encodes `batch` as one OTLP JSON document.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| json!({ "key": key.as_str(), "value": Self::attribute_value(value) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(Self::format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": spans
                }]
            }]
        })
    }

    fn format_span(span: &SpanData) -> JsonValue {
        let parent = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };
        let (status_code, status_message) = Self::status(&span.status);

        json!({
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": parent,
            "name": span.name,
            "kind": Self::kind(&span.span_kind),
            "startTimeUnixNano": unix_nanos(span.start_time),
            "endTimeUnixNano": unix_nanos(span.end_time),
            "attributes": Self::attributes(&span.attributes),
            "events": span.events.iter().map(Self::event).collect::<Vec<_>>(),
            "links": span.links.iter().map(Self::link).collect::<Vec<_>>(),
            "status": { "code": status_code, "message": status_message },
        })
    }

    /// OTLP `SpanKind` numbering.
    const fn kind(kind: &SpanKind) -> u8 {
        match kind {
            SpanKind::Internal => 1,
            SpanKind::Server => 2,
            SpanKind::Client => 3,
            SpanKind::Producer => 4,
            SpanKind::Consumer => 5,
        }
    }

    fn attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
        attributes
            .iter()
            .map(|kv| json!({ "key": kv.key.as_str(), "value": Self::attribute_value(&kv.value) }))
            .collect()
    }

    /// OTLP `AnyValue`. 64-bit integers are strings, as the JSON mapping
    /// requires; arrays fall back to their debug text.
    fn attribute_value(value: &Value) -> JsonValue {
        match value {
            Value::Bool(b) => json!({ "boolValue": b }),
            Value::I64(i) => json!({ "intValue": i.to_string() }),
            Value::F64(f) => json!({ "doubleValue": f }),
            Value::String(s) => json!({ "stringValue": s.as_str() }),
            Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
        }
    }

    fn event(event: &Event) -> JsonValue {
        json!({
            "timeUnixNano": unix_nanos(event.timestamp),
            "name": event.name,
            "attributes": Self::attributes(&event.attributes),
        })
    }

    fn link(link: &Link) -> JsonValue {
        json!({
            "traceId": format!("{:032x}", link.span_context.trace_id()),
            "spanId": format!("{:016x}", link.span_context.span_id()),
            "attributes": Self::attributes(&link.attributes),
        })
    }

    fn status(status: &Status) -> (u8, String) {
        match status {
            Status::Unset => (0, String::new()),
            Status::Ok => (1, String::new()),
            Status::Error { description } => (2, description.to_string()),
        }
    }
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch times map to 0.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos().to_string()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("scope", &self.scope).finish_non_exhaustive()
    }
}
