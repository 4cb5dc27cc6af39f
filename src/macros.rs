//! Logging macros for ergonomic log message formatting.
//!
//! The level macros format their message like `format!` and return the
//! logger's [`Result`](crate::Result). Placeholders in `{braces}` that
//! survive formatting (written as `{{name}}`) are interpolated from the
//! context as usual.
//!
//! # Examples
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use rust_structured_logger::{fields, info};
//!
//! let mut logger = Logger::new("svc");
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//!
//! let context = fields! { "user" => "ada", "attempt" => 2 };
//! logger.log_with_context("notice", "login by {user}", &context).unwrap();
//! ```

/// Log a formatted message at a level given by name.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let mut logger = Logger::new("svc");
/// use rust_structured_logger::log;
/// log!(logger, "info", "Simple message").unwrap();
/// log!(logger, "ERROR", "Error code: {}", 500).unwrap();
/// assert!(log!(logger, "verbose", "nope").is_err());
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+))
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Emergency, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Alert, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Critical, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let mut logger = Logger::new("svc");
/// use rust_structured_logger::error;
/// let path = "/etc/app.toml";
/// error!(logger, "Failed to open file: {}", path).unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Error, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Warning, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Notice, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Info, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let mut logger = Logger::new("svc");
/// use rust_structured_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_severity($crate::Severity::Debug, &format!($($arg)+), &$crate::Fields::new())
    };
}

/// Build a [`Fields`](crate::Fields) map from `key => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_structured_logger::{fields, FieldValue};
///
/// let context = fields! { "user" => "ada", "retries" => 3, "tags" => vec!["a", "b"] };
/// assert_eq!(context.len(), 3);
/// assert_eq!(context.get("retries"), Some(&FieldValue::Int(3)));
///
/// let empty = fields! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(fields.insert($key, $value);)+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use crate::outputs::MemoryOutput;
    use crate::{FieldValue, Logger, Severity};

    fn capture() -> (Logger, crate::outputs::MemoryHandle) {
        let output = MemoryOutput::new(Severity::Debug);
        let handle = output.handle();
        let logger = Logger::builder("macros")
            .timezone("UTC")
            .output(output)
            .build()
            .unwrap();
        (logger, handle)
    }

    #[test]
    fn test_level_macros() {
        let (mut logger, captured) = capture();

        emergency!(logger, "e").unwrap();
        alert!(logger, "a").unwrap();
        critical!(logger, "c").unwrap();
        error!(logger, "code {}", 500).unwrap();
        warning!(logger, "w").unwrap();
        notice!(logger, "n").unwrap();
        info!(logger, "i").unwrap();
        debug!(logger, "d").unwrap();

        let levels: Vec<String> = captured
            .json_lines()
            .unwrap()
            .iter()
            .map(|line| line["level"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            levels,
            ["emergency", "alert", "critical", "error", "warning", "notice", "info", "debug"]
        );
        assert_eq!(captured.json_lines().unwrap()[3]["message"], "code 500");
    }

    #[test]
    fn test_log_macro_by_name() {
        let (mut logger, captured) = capture();
        log!(logger, "Warning", "disk at {}%", 91).unwrap();
        assert!(log!(logger, "loud", "x").unwrap_err().is_invalid_level());

        let lines = captured.json_lines().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["level"], "warning");
    }

    #[test]
    fn test_escaped_placeholder_survives_format() {
        let (mut logger, captured) = capture();
        logger.interpolator_mut().set_default_context(fields! { "user" => "ada" });
        info!(logger, "{{user}} logged in from {}", "cli").unwrap();

        let lines = captured.json_lines().unwrap();
        assert_eq!(lines[0]["message"], "ada logged in from cli");
    }

    #[test]
    fn test_fields_macro() {
        let fields = fields! { "a" => 1, "b" => true, "a" => "replaced" };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("a"), Some(&FieldValue::from("replaced")));
    }
}
