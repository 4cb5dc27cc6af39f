//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    fields::{ExceptionRecord, FieldValue, Fields},
    interpolate::Interpolator,
    log_level::{self, Severity},
    metrics::LoggerMetrics,
    output::OutputSink,
    timestamp::{default_timezone, parse_timezone, TimeFormat},
};
use crate::outputs::NoopOutput;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use std::error::Error;

/// Builds one JSON line per call and writes it to every output whose
/// threshold the call's severity passes.
///
/// Each line holds `timestamp`, `level` and `message` first, then the
/// static fields, then the dynamic fields added since the previous call.
/// Later keys override earlier ones. Dynamic fields are cleared by every
/// successful `log` call.
///
/// A `Logger` is `Send` but not `Sync`; share it across threads behind a
/// mutex, or use [`Logger::record`] to keep per-call fields local.
///
/// # Example
///
/// ```
/// use rust_structured_logger::outputs::MemoryOutput;
/// use rust_structured_logger::{Fields, Logger, Severity};
///
/// let output = MemoryOutput::new(Severity::Info);
/// let captured = output.handle();
/// let mut logger = Logger::builder("billing").output(output).build().unwrap();
///
/// logger
///     .add_string("invoice", "INV-7")
///     .add_integer("items", 3)
///     .log_with_context("error", "charge failed for {user}", &Fields::new().with("user", "ada"))
///     .unwrap();
///
/// let lines = captured.json_lines().unwrap();
/// let line = &lines[0];
/// assert_eq!(line["message"], "charge failed for ada");
/// assert_eq!(line["items"], 3);
/// ```
pub struct Logger {
    name: String,
    timezone: Tz,
    time_format: TimeFormat,
    numeric_check: bool,
    static_fields: Fields,
    dynamic_fields: Fields,
    interpolator: Interpolator,
    outputs: Vec<Box<dyn OutputSink>>,
    /// Whether `outputs` only holds the automatic no-op output
    fallback_output: bool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger in the default timezone writing to a no-op output
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut logger = Self {
            name: name.into(),
            timezone: default_timezone(),
            time_format: TimeFormat::default(),
            numeric_check: true,
            static_fields: Fields::new(),
            dynamic_fields: Fields::new(),
            interpolator: Interpolator::new(),
            outputs: Vec::new(),
            fallback_output: false,
            metrics: LoggerMetrics::new(),
        };
        logger.install_fallback();
        logger
    }

    /// Logger with explicit outputs and timezone identifier
    ///
    /// An empty `outputs` installs a no-op output at the lowest threshold.
    pub fn with_outputs(
        name: impl Into<String>,
        outputs: Vec<Box<dyn OutputSink>>,
        timezone: &str,
    ) -> Result<Self> {
        let timezone = parse_timezone(timezone)?;
        let mut logger = Self::new(name);
        logger.timezone = timezone;
        for output in outputs {
            logger.add_output(output);
        }
        Ok(logger)
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    fn install_fallback(&mut self) {
        if self.outputs.is_empty() {
            self.outputs.push(Box::new(NoopOutput::new(Severity::Debug)));
            self.fallback_output = true;
        }
    }

    /// Name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Timezone used for the `timestamp` field
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Change the timezone; the current one is kept on error
    pub fn set_timezone(&mut self, timezone: &str) -> Result<()> {
        self.timezone = parse_timezone(timezone)?;
        Ok(())
    }

    /// Current timestamp representation
    pub fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    /// Select any timestamp representation, including a custom pattern
    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.time_format = format;
    }

    /// Stamp lines with Unix seconds (the default)
    pub fn set_time_format_unix(&mut self) {
        self.time_format = TimeFormat::Unix;
    }

    /// Stamp lines with ISO 8601, microseconds and offset
    pub fn set_time_format_iso8601(&mut self) {
        self.time_format = TimeFormat::Iso8601;
    }

    /// Emit numeric-looking field strings as JSON numbers (on by default)
    pub fn set_numeric_check(&mut self, enabled: bool) {
        self.numeric_check = enabled;
    }

    /// Fields written on every line
    pub fn static_fields(&self) -> &Fields {
        &self.static_fields
    }

    /// Replace the whole static field set
    pub fn set_static_fields(&mut self, fields: Fields) {
        self.static_fields = fields;
    }

    /// Fields waiting for the next `log` call
    pub fn dynamic_fields(&self) -> &Fields {
        &self.dynamic_fields
    }

    /// Add a dynamic field for the next line, replacing any previous value
    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        self.dynamic_fields.insert(key, value);
        self
    }

    /// Add a string field for the next line
    pub fn add_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.add_field(key, FieldValue::String(value.into()))
    }

    /// Add an integer field for the next line
    pub fn add_integer(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        self.add_field(key, FieldValue::Int(value))
    }

    /// Add a float field for the next line
    pub fn add_float(&mut self, key: impl Into<String>, value: f64) -> &mut Self {
        self.add_field(key, FieldValue::Float(value))
    }

    /// Add a boolean field for the next line
    pub fn add_boolean(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.add_field(key, FieldValue::Bool(value))
    }

    /// Add a list field for the next line
    pub fn add_array<T: Into<FieldValue>>(
        &mut self,
        key: impl Into<String>,
        values: Vec<T>,
    ) -> &mut Self {
        self.add_field(key, values)
    }

    /// Add a nested key/value object
    pub fn add_map(&mut self, key: impl Into<String>, fields: Fields) -> &mut Self {
        self.add_field(key, FieldValue::Map(fields))
    }

    /// Add an [`ExceptionRecord`] built from `err` at the caller's location
    #[track_caller]
    pub fn add_exception(
        &mut self,
        key: impl Into<String>,
        err: &(dyn Error + 'static),
    ) -> &mut Self {
        let record = ExceptionRecord::from_error(err);
        self.add_field(key, FieldValue::Exception(record))
    }

    /// Message interpolator, holding the default context
    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }

    /// Mutable access to the interpolator, e.g. to set a default context
    pub fn interpolator_mut(&mut self) -> &mut Interpolator {
        &mut self.interpolator
    }

    /// Append an output; the automatic no-op output is replaced by the first
    /// explicit one.
    pub fn add_output(&mut self, output: Box<dyn OutputSink>) {
        if self.fallback_output {
            self.outputs.clear();
            self.fallback_output = false;
        }
        self.outputs.push(output);
    }

    /// Configured outputs in dispatch order
    pub fn outputs(&self) -> &[Box<dyn OutputSink>] {
        &self.outputs
    }

    /// Mutable access to one output, e.g. to change its threshold
    pub fn output_mut(&mut self, index: usize) -> Option<&mut Box<dyn OutputSink>> {
        self.outputs.get_mut(index)
    }

    /// Delivery counters for this logger
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log at a level given by name.
    ///
    /// Unrecognized levels fail with `InvalidLevel` before anything else
    /// happens; the dynamic fields are kept for the next call.
    pub fn log(&mut self, level: &str, message: &str) -> Result<()> {
        self.log_with_context(level, message, &Fields::new())
    }

    /// Log with an interpolation context for `{key}` placeholders
    pub fn log_with_context(&mut self, level: &str, message: &str, context: &Fields) -> Result<()> {
        let severity = log_level::validate(level)?;
        self.log_severity(severity, message, context)
    }

    /// Log at a known severity; cannot fail on the level
    pub fn log_severity(&mut self, severity: Severity, message: &str, context: &Fields) -> Result<()> {
        let line = self.render_line(severity, message, context, &self.dynamic_fields, Utc::now())?;
        self.dynamic_fields.clear();
        self.dispatch(severity, &line)
    }

    /// Log with a caller-owned field set instead of the dynamic fields.
    ///
    /// The dynamic fields are left untouched.
    pub fn log_with_fields(
        &mut self,
        severity: Severity,
        message: &str,
        context: &Fields,
        fields: &Fields,
    ) -> Result<()> {
        let line = self.render_line(severity, message, context, fields, Utc::now())?;
        self.dispatch(severity, &line)
    }

    /// Build the JSON line for a call without writing it
    pub fn render_line(
        &self,
        severity: Severity,
        message: &str,
        context: &Fields,
        dynamic: &Fields,
        instant: DateTime<Utc>,
    ) -> Result<String> {
        let mut line = serde_json::Map::new();
        line.insert(
            "timestamp".to_string(),
            Value::String(self.time_format.format_at(instant, self.timezone)),
        );
        line.insert("level".to_string(), Value::String(severity.to_str().to_string()));
        line.insert(
            "message".to_string(),
            Value::String(self.interpolator.interpolate(message, context)),
        );

        for (key, value) in self.static_fields.iter().chain(dynamic.iter()) {
            line.insert(key.to_string(), value.to_json_value(self.numeric_check));
        }

        Ok(serde_json::to_string(&Value::Object(line))?)
    }

    /// Write a rendered line to every output accepting `severity`.
    ///
    /// All accepting outputs are attempted; the first failure is returned
    /// and later ones are reported on stderr.
    fn dispatch(&mut self, severity: Severity, line: &str) -> Result<()> {
        self.metrics.record_line();
        let line = format!("{}\n", line);
        let mut first_error: Option<LoggerError> = None;

        for (idx, output) in self.outputs.iter_mut().enumerate() {
            if !output.accepts(severity) {
                self.metrics.record_skipped();
                continue;
            }

            match output.rewind().and_then(|()| output.write(&line)) {
                Ok(()) => {
                    self.metrics.record_delivered();
                }
                Err(e) => {
                    self.metrics.record_failed();
                    if first_error.is_none() {
                        first_error = Some(e);
                    } else {
                        eprintln!(
                            "[LOGGER ERROR] Output #{} ({}) failed: {}",
                            idx,
                            output.name(),
                            e
                        );
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn emergency(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Emergency, message, &Fields::new())
    }

    #[inline]
    pub fn alert(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Alert, message, &Fields::new())
    }

    #[inline]
    pub fn critical(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Critical, message, &Fields::new())
    }

    #[inline]
    pub fn error(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Error, message, &Fields::new())
    }

    #[inline]
    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Warning, message, &Fields::new())
    }

    #[inline]
    pub fn notice(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Notice, message, &Fields::new())
    }

    #[inline]
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Info, message, &Fields::new())
    }

    #[inline]
    pub fn debug(&mut self, message: &str) -> Result<()> {
        self.log_severity(Severity::Debug, message, &Fields::new())
    }

    /// Flush every output, stopping at the first error
    pub fn flush(&mut self) -> Result<()> {
        for output in self.outputs.iter_mut() {
            output.flush()?;
        }
        Ok(())
    }

    /// Close every output. Closing again is a no-op.
    pub fn close(&mut self) -> Result<()> {
        let mut first_error = None;
        for output in self.outputs.iter_mut() {
            if let Err(e) = output.close() {
                if first_error.is_none() {
                    first_error = Some(e);
                } else {
                    eprintln!("[LOGGER ERROR] Failed to close output '{}': {}", output.name(), e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        for output in self.outputs.iter_mut().filter(|output| !output.is_closed()) {
            if let Err(e) = output.flush() {
                eprintln!(
                    "[LOGGER ERROR] Logger '{}' failed to flush output '{}' during shutdown: {}",
                    self.name,
                    output.name(),
                    e
                );
            }
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let logger = Logger::builder("api")
///     .output(StreamOutput::stdout(Severity::Info))
///     .timezone("UTC")
///     .time_format(TimeFormat::Iso8601)
///     .static_field("service", "api")
///     .build()
///     .unwrap();
/// assert_eq!(logger.outputs().len(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    outputs: Vec<Box<dyn OutputSink>>,
    timezone: Option<String>,
    time_format: TimeFormat,
    static_fields: Fields,
    default_context: Fields,
    numeric_check: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outputs: Vec::new(),
            timezone: None,
            time_format: TimeFormat::default(),
            static_fields: Fields::new(),
            default_context: Fields::new(),
            numeric_check: true,
        }
    }

    /// Add an output
    #[must_use = "builder methods return a new value"]
    pub fn output<O: OutputSink + 'static>(mut self, output: O) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_output(mut self, output: Box<dyn OutputSink>) -> Self {
        self.outputs.push(output);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn outputs(mut self, outputs: Vec<Box<dyn OutputSink>>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    /// IANA timezone identifier, validated by `build`
    #[must_use = "builder methods return a new value"]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, format: TimeFormat) -> Self {
        self.time_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn static_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.static_fields.insert(key, value);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn static_fields(mut self, fields: Fields) -> Self {
        self.static_fields = fields;
        self
    }

    /// Default interpolation context merged under every call's context
    #[must_use = "builder methods return a new value"]
    pub fn default_context(mut self, context: Fields) -> Self {
        self.default_context = context;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn numeric_check(mut self, enabled: bool) -> Self {
        self.numeric_check = enabled;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let mut logger = Logger::new(self.name);
        if let Some(timezone) = self.timezone {
            logger.set_timezone(&timezone)?;
        }
        logger.time_format = self.time_format;
        logger.numeric_check = self.numeric_check;
        logger.static_fields = self.static_fields;
        logger.interpolator.set_default_context(self.default_context);
        for output in self.outputs {
            logger.add_output(output);
        }
        Ok(logger)
    }
}
