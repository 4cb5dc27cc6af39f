//! # Rust Structured Logger
//!
//! A structured logging library that renders every log call as one JSON
//! object per line and fans it out to outputs filtered by severity.
//!
//! ## Features
//!
//! - **Eight Severities**: emergency through debug, each with a numeric weight
//! - **Structured Fields**: static fields on every line, dynamic fields for the next one
//! - **Message Interpolation**: `{placeholder}` substitution from a call context
//! - **Per-Output Thresholds**: stdout, stderr, files, or custom [`OutputSink`]s
//! - **Timezone Aware**: Unix or ISO 8601 timestamps in any IANA timezone
//!
//! ## Example
//!
//! ```
//! use rust_structured_logger::prelude::*;
//!
//! let mut logger = Logger::builder("api")
//!     .output(StreamOutput::stdout(Severity::Info))
//!     .timezone("UTC")
//!     .time_format(TimeFormat::Iso8601)
//!     .static_field("service", "api")
//!     .build()?;
//!
//! logger
//!     .add_string("request_id", "r-42")
//!     .log_with_context("info", "GET {path} served", &Fields::new().with("path", "/health"))?;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod outputs;

pub mod prelude {
    pub use crate::core::{
        ExceptionRecord, FieldValue, Fields, Interpolator, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, OutputSink, RecordBuilder, Result, Severity, TimeFormat,
    };
    pub use crate::outputs::{MemoryOutput, NoopOutput, StreamOutput};
}

pub use crate::core::{
    parse_timezone, ExceptionRecord, FieldValue, Fields, Interpolator, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, OutputConfig, OutputKind, OutputSink, RecordBuilder,
    Result, Severity, TimeFormat, DEFAULT_TIMEZONE,
};
pub use crate::outputs::{MemoryOutput, NoopOutput, StreamOutput};
