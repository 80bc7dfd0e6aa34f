//! Tracing with OpenTelemetry export to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer provider → FileSpanExporter → rotating OTLP-JSON file
//! ```
//!
//! Traces land in `~/.local/share/zellij/role-tagger/role-tagger-otlp.json`.
//! The file rotates at 10 MiB and keeps three numbered backups. The level comes
//! from the `trace_level` plugin option and defaults to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
