//! Severity definitions and level validation

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight recognized severities.
///
/// The discriminant is the severity weight, so the derived ordering follows
/// the weights. `Alert` outranks `Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u16)]
pub enum Severity {
    Debug = 100,
    Info = 200,
    Notice = 300,
    Warning = 400,
    Error = 500,
    Critical = 600,
    Emergency = 700,
    Alert = 800,
}

impl Severity {
    /// All severities, lowest weight first
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Emergency,
        Severity::Alert,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Emergency => "emergency",
            Severity::Alert => "alert",
        }
    }

    #[inline]
    pub fn weight(&self) -> u16 {
        *self as u16
    }

    /// Whether a message at this severity reaches an output whose threshold
    /// is `threshold`.
    #[inline]
    pub fn passes(&self, threshold: Severity) -> bool {
        threshold.weight() <= self.weight()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "notice" => Ok(Severity::Notice),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            "emergency" => Ok(Severity::Emergency),
            "alert" => Ok(Severity::Alert),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

/// Validate a level string (trimmed, case-insensitive).
pub fn validate(level: &str) -> Result<Severity> {
    level.parse()
}

/// Weight of a level string; fails like [`validate`].
pub fn weight(level: &str) -> Result<u16> {
    validate(level).map(|severity| severity.weight())
}
