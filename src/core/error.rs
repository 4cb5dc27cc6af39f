//! Error types for the structured logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level string outside the eight recognized severities
    #[error("Invalid log level was provided: '{level}'")]
    InvalidLevel { level: String },

    /// Unknown timezone identifier
    #[error("Invalid timezone '{timezone}': {message}")]
    TimeZone { timezone: String, message: String },

    /// Write attempted on an output that was already closed
    #[error("Output '{output}' is closed")]
    OutputClosed { output: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            level: level.into(),
        }
    }

    /// Create a timezone error
    pub fn time_zone(timezone: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::TimeZone {
            timezone: timezone.into(),
            message: message.into(),
        }
    }

    /// Create a closed output error
    pub fn output_closed(output: impl Into<String>) -> Self {
        LoggerError::OutputClosed {
            output: output.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True for the error raised on unrecognized level strings
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, LoggerError::InvalidLevel { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_level("fatal");
        assert!(err.is_invalid_level());

        let err = LoggerError::config("outputs[0]", "missing path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::time_zone("Mars/Olympus", "unknown zone");
        assert!(matches!(err, LoggerError::TimeZone { .. }));
        assert!(!err.is_invalid_level());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_level("fatal");
        assert_eq!(err.to_string(), "Invalid log level was provided: 'fatal'");

        let err = LoggerError::output_closed("stream:/var/log/app.log");
        assert_eq!(err.to_string(), "Output 'stream:/var/log/app.log' is closed");

        let err = LoggerError::config("LoggerConfig", "no name");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: no name"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open /root/x", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open /root/x"));
    }
}
