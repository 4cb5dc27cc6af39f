//! Timestamp formatting and timezone resolution
//!
//! Log lines carry their timestamp as a string rendered in the logger's
//! timezone, either as Unix seconds or as ISO 8601 with microseconds and a
//! numeric offset.

use super::error::{LoggerError, Result};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Timezone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

/// Resolved [`DEFAULT_TIMEZONE`]
pub fn default_timezone() -> Tz {
    chrono_tz::Europe::London
}

const ISO8601_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Timestamp representation for the `timestamp` field
///
/// # Examples
///
/// ```
/// use rust_structured_logger::TimeFormat;
///
/// let utc = "UTC".parse().unwrap();
/// assert_eq!(TimeFormat::Unix.format_epoch(1234310400, utc), "1234310400");
/// assert_eq!(
///     TimeFormat::Iso8601.format_epoch(1234310400, utc),
///     "2009-02-11T00:00:00.000000+00:00"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// Unix timestamp in seconds: `1736332245`
    #[default]
    Unix,

    /// ISO 8601 with microseconds and offset: `2025-01-08T10:30:45.123456+00:00`
    Iso8601,

    /// Custom strftime format
    Custom(String),
}

impl TimeFormat {
    /// Format a zoned datetime according to this format
    #[must_use]
    pub fn format<Z: TimeZone>(&self, datetime: &DateTime<Z>) -> String
    where
        Z::Offset: std::fmt::Display,
    {
        match self {
            TimeFormat::Unix => datetime.timestamp().to_string(),
            TimeFormat::Iso8601 => datetime.format(ISO8601_MICROS).to_string(),
            TimeFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Format an instant in the given timezone
    #[must_use]
    pub fn format_at(&self, instant: DateTime<Utc>, timezone: Tz) -> String {
        self.format(&instant.with_timezone(&timezone))
    }

    /// Format whole Unix seconds in the given timezone
    #[must_use]
    pub fn format_epoch(&self, seconds: i64, timezone: Tz) -> String {
        match DateTime::from_timestamp(seconds, 0) {
            Some(instant) => self.format_at(instant, timezone),
            None => seconds.to_string(),
        }
    }

    /// Format the current time in the given timezone
    #[must_use]
    pub fn now(&self, timezone: Tz) -> String {
        self.format_at(Utc::now(), timezone)
    }
}

/// Resolve an IANA timezone identifier such as `Europe/London`
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|e| LoggerError::time_zone(name, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH: i64 = 1234310400;

    fn utc() -> Tz {
        parse_timezone("UTC").expect("UTC is known")
    }

    #[test]
    fn test_unix_format() {
        assert_eq!(TimeFormat::Unix.format_epoch(EPOCH, utc()), "1234310400");
    }

    #[test]
    fn test_unix_ignores_timezone() {
        let tokyo = parse_timezone("Asia/Tokyo").unwrap();
        assert_eq!(TimeFormat::Unix.format_epoch(EPOCH, tokyo), "1234310400");
    }

    #[test]
    fn test_iso8601_format() {
        assert_eq!(
            TimeFormat::Iso8601.format_epoch(EPOCH, utc()),
            "2009-02-11T00:00:00.000000+00:00"
        );
    }

    #[test]
    fn test_iso8601_offset() {
        let budapest = parse_timezone("Europe/Budapest").unwrap();
        assert_eq!(
            TimeFormat::Iso8601.format_epoch(EPOCH, budapest),
            "2009-02-11T01:00:00.000000+01:00"
        );
    }

    #[test]
    fn test_iso8601_micros() {
        let instant = DateTime::from_timestamp(EPOCH, 123_456_000).unwrap();
        assert_eq!(
            TimeFormat::Iso8601.format_at(instant, utc()),
            "2009-02-11T00:00:00.123456+00:00"
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimeFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format_epoch(EPOCH, utc()), "2009/02/11 00:00");
    }

    #[test]
    fn test_default_is_unix() {
        assert_eq!(TimeFormat::default(), TimeFormat::Unix);
    }

    #[test]
    fn test_now_is_numeric_for_unix() {
        let now: i64 = TimeFormat::Unix.now(utc()).parse().expect("numeric");
        assert!(now > EPOCH);
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone(DEFAULT_TIMEZONE).unwrap(), default_timezone());
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, LoggerError::TimeZone { .. }));
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&TimeFormat::Iso8601).unwrap(), "\"iso8601\"");
        let parsed: TimeFormat = serde_json::from_str(r#"{"custom":"%Y"}"#).unwrap();
        assert_eq!(parsed, TimeFormat::Custom("%Y".to_string()));
    }
}
