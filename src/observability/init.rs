//! Subscriber setup wiring `tracing` into the OTLP file exporter.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name in exported traces.
const SERVICE_NAME: &str = "product-manager";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "product-manager-otlp.json";

/// Installs the global subscriber and returns the trace file path.
///
/// Nothing is written to the terminal, which belongs to the UI. Returns
/// `None` when the data directory cannot be created or a subscriber is
/// already installed; tracing is optional and the caller carries on.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = config.data_dir.clone().unwrap_or_else(paths::data_dir);
    std::fs::create_dir_all(&data_dir).ok()?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(env_filter(config.trace_level.as_deref()))
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(trace_file)
}

/// `RUST_LOG` when set and valid, otherwise the configured level, otherwise
/// `info`.
fn env_filter(trace_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for_level(trace_level))
}

fn filter_for_level(trace_level: Option<&str>) -> EnvFilter {
    let level = trace_level.map(str::trim).filter(|level| !level.is_empty()).unwrap_or("info");
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
