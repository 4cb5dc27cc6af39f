//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a logger as data, typically loaded from a
//! JSON document:
//!
//! ```json
//! {
//!   "name": "api",
//!   "timezone": "UTC",
//!   "time_format": "iso8601",
//!   "static_fields": { "service": "api", "version": "1.2.3" },
//!   "outputs": [
//!     { "kind": "stdout", "level": "info" },
//!     { "kind": "file", "level": "error", "path": "/var/log/api-errors.jsonl" }
//!   ]
//! }
//! ```

use super::error::{LoggerError, Result};
use super::fields::{FieldValue, Fields};
use super::log_level;
use super::logger::Logger;
use super::output::OutputSink;
use super::timestamp::{TimeFormat, DEFAULT_TIMEZONE};
use crate::outputs::{NoopOutput, StreamOutput};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_timezone_name() -> String {
    DEFAULT_TIMEZONE.to_string()
}

fn default_level() -> String {
    "debug".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Noop,
    Stdout,
    Stderr,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub kind: OutputKind,
    /// Minimum level name; validated when the output is opened
    #[serde(default = "default_level")]
    pub level: String,
    /// Required for `file` outputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    pub fn new(kind: OutputKind, level: impl Into<String>) -> Self {
        Self {
            kind,
            level: level.into(),
            path: None,
        }
    }

    pub fn file(level: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: OutputKind::File,
            level: level.into(),
            path: Some(path.into()),
        }
    }

    /// Open the described output
    pub fn open(&self) -> Result<Box<dyn OutputSink>> {
        let level = log_level::validate(&self.level)?;
        let output: Box<dyn OutputSink> = match self.kind {
            OutputKind::Noop => Box::new(NoopOutput::new(level)),
            OutputKind::Stdout => Box::new(StreamOutput::stdout(level)),
            OutputKind::Stderr => Box::new(StreamOutput::stderr(level)),
            OutputKind::File => {
                let path = self
                    .path
                    .as_ref()
                    .ok_or_else(|| LoggerError::config("file output", "missing 'path'"))?;
                Box::new(StreamOutput::file(level, path.clone())?)
            }
        };
        Ok(output)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default = "default_timezone_name")]
    pub timezone: String,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default = "default_true")]
    pub numeric_check: bool,
    #[serde(default)]
    pub static_fields: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub outputs: Vec<OutputConfig>,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timezone: default_timezone_name(),
            time_format: TimeFormat::default(),
            numeric_check: true,
            static_fields: serde_json::Map::new(),
            outputs: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        if config.name.trim().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "'name' must not be empty"));
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    /// Open every output and build the logger
    pub fn build(&self) -> Result<Logger> {
        let static_fields: Fields = self
            .static_fields
            .iter()
            .map(|(key, value)| (key.clone(), FieldValue::from(value.clone())))
            .collect();

        let mut builder = Logger::builder(self.name.clone())
            .timezone(self.timezone.clone())
            .time_format(self.time_format.clone())
            .numeric_check(self.numeric_check)
            .static_fields(static_fields);

        for output in &self.outputs {
            builder = builder.boxed_output(output.open()?);
        }
        builder.build()
    }
}
