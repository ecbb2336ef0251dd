//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK (simple processor) → FileSpanExporter → skybook-otlp.json
//! ```
//!
//! The file lives in the plugin data directory and rotates with three numbered
//! backups. The verbosity comes from the `trace_level` configuration key, which
//! accepts any `EnvFilter` directive (`debug`, `skybook=trace`, ...).

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
