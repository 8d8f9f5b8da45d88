//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider
//!                                             → FileSpanExporter → rotating JSON file
//! ```
//!
//! Spans land in `<data dir>/product-manager-otlp.json`, one OTLP JSON
//! document per line, rotated at 10 MB with three backups.
//!
//! The filter level is taken from:
//! 1. `RUST_LOG`
//! 2. `trace_level` in the configuration
//! 3. `info`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`tracer`]: tracer provider and file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
