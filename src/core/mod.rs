//! Core logger types and traits

pub mod config;
pub mod error;
pub mod fields;
pub mod interpolate;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output;
pub mod record_builder;
pub mod timestamp;

pub use config::{LoggerConfig, OutputConfig, OutputKind};
pub use error::{LoggerError, Result};
pub use fields::{ExceptionRecord, FieldValue, Fields};
pub use interpolate::Interpolator;
pub use log_level::Severity;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output::OutputSink;
pub use record_builder::RecordBuilder;
pub use timestamp::{parse_timezone, TimeFormat, DEFAULT_TIMEZONE};
