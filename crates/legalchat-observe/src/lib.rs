//! Observability setup for LegalChat: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;
