//! Per-call field scope for log lines
//!
//! Fields added to a [`RecordBuilder`] belong to that one call only; the
//! logger's shared dynamic fields are neither read nor cleared.

use super::error::Result;
use super::fields::{ExceptionRecord, FieldValue, Fields};
use super::log_level::{self, Severity};
use super::logger::Logger;
use std::error::Error;

/// Builder for a single log line with its own fields
///
/// # Example
///
/// ```
/// use rust_structured_logger::outputs::MemoryOutput;
/// use rust_structured_logger::{Logger, Severity};
///
/// let output = MemoryOutput::new(Severity::Debug);
/// let captured = output.handle();
/// let mut logger = Logger::builder("api").output(output).build().unwrap();
///
/// logger.record()
///     .string("route", "/users")
///     .integer("status", 200)
///     .float("latency_ms", 42.5)
///     .log("info", "request done")
///     .unwrap();
///
/// let lines = captured.json_lines().unwrap();
/// assert_eq!(lines[0]["status"], 200);
/// ```
pub struct RecordBuilder<'a> {
    logger: &'a mut Logger,
    fields: Fields,
    context: Fields,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(logger: &'a mut Logger) -> Self {
        Self {
            logger,
            fields: Fields::new(),
            context: Fields::new(),
        }
    }

    /// Add a structured field to this line
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key, value);
        self
    }

    #[must_use]
    pub fn string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.field(key, FieldValue::String(value.into()))
    }

    #[must_use]
    pub fn integer(self, key: impl Into<String>, value: i64) -> Self {
        self.field(key, FieldValue::Int(value))
    }

    #[must_use]
    pub fn float(self, key: impl Into<String>, value: f64) -> Self {
        self.field(key, FieldValue::Float(value))
    }

    #[must_use]
    pub fn boolean(self, key: impl Into<String>, value: bool) -> Self {
        self.field(key, FieldValue::Bool(value))
    }

    #[must_use]
    pub fn array<T: Into<FieldValue>>(self, key: impl Into<String>, values: Vec<T>) -> Self {
        self.field(key, values)
    }

    #[must_use]
    #[track_caller]
    pub fn exception(self, key: impl Into<String>, err: &(dyn Error + 'static)) -> Self {
        let record = ExceptionRecord::from_error(err);
        self.field(key, FieldValue::Exception(record))
    }

    /// Interpolation context for the message
    #[must_use]
    pub fn context(mut self, context: Fields) -> Self {
        self.context = context;
        self
    }

    /// Validate `level` and write the line
    pub fn log(self, level: &str, message: &str) -> Result<()> {
        let severity = log_level::validate(level)?;
        self.log_severity(severity, message)
    }

    pub fn log_severity(self, severity: Severity, message: &str) -> Result<()> {
        self.logger
            .log_with_fields(severity, message, &self.context, &self.fields)
    }
}

impl Logger {
    /// Start a line whose fields stay local to it
    pub fn record(&mut self) -> RecordBuilder<'_> {
        RecordBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::MemoryOutput;

    #[test]
    fn test_record_fields_are_local() {
        let output = MemoryOutput::new(Severity::Debug);
        let captured = output.handle();
        let mut logger = Logger::builder("svc").output(output).build().unwrap();

        logger.add_string("shared", "pending");
        logger
            .record()
            .string("local", "yes")
            .boolean("ok", true)
            .array("ids", vec![1, 2])
            .context(Fields::new().with("who", "ada"))
            .log("notice", "hi {who}")
            .unwrap();

        assert_eq!(logger.dynamic_fields().len(), 1);

        let lines = captured.json_lines().unwrap();
        assert_eq!(lines[0]["local"], "yes");
        assert_eq!(lines[0]["ok"], true);
        assert_eq!(lines[0]["ids"], serde_json::json!([1, 2]));
        assert_eq!(lines[0]["message"], "hi ada");
        assert!(lines[0].get("shared").is_none());
    }

    #[test]
    fn test_record_merges_static_fields() {
        let output = MemoryOutput::new(Severity::Debug);
        let captured = output.handle();
        let mut logger = Logger::builder("svc")
            .output(output)
            .static_field("service", "billing")
            .static_field("tier", "gold")
            .build()
            .unwrap();

        logger
            .record()
            .string("tier", "silver")
            .log_severity(Severity::Warning, "downgraded")
            .unwrap();

        let lines = captured.json_lines().unwrap();
        assert_eq!(lines[0]["service"], "billing");
        assert_eq!(lines[0]["tier"], "silver");
    }

    #[test]
    fn test_record_invalid_level() {
        let mut logger = Logger::new("svc");
        let err = logger.record().integer("n", 1).log("loud", "x").unwrap_err();
        assert!(err.is_invalid_level());
        assert_eq!(logger.metrics().lines_logged(), 0);
    }

    #[test]
    fn test_record_exception() {
        let output = MemoryOutput::new(Severity::Debug);
        let captured = output.handle();
        let mut logger = Logger::builder("svc").output(output).build().unwrap();
        let err = std::io::Error::from_raw_os_error(13);

        logger
            .record()
            .exception("error", &err)
            .log_severity(Severity::Critical, "denied")
            .unwrap();

        let lines = captured.json_lines().unwrap();
        assert_eq!(lines[0]["error"]["code"], 13);
    }
}
