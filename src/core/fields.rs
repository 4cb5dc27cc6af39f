//! Typed field sets for structured log lines
//!
//! This module provides:
//! - `FieldValue`: the closed set of values a field can hold
//! - `Fields`: an insertion-ordered key/value set
//! - `ExceptionRecord`: a serializable view of a caught error

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::panic::Location;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Array(Vec<FieldValue>),
    Map(Fields),
    Exception(ExceptionRecord),
}

impl FieldValue {
    /// String form used by message interpolation.
    ///
    /// Composite values have no string form and return `None`; `Null`
    /// interpolates as the empty string.
    pub fn as_interpolation(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Null => Some(String::new()),
            FieldValue::Int(_)
            | FieldValue::Float(_)
            | FieldValue::Bool(_)
            | FieldValue::Exception(_) => Some(self.to_string()),
            FieldValue::Array(_) | FieldValue::Map(_) => None,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// With `numeric_check`, strings that look like numbers are emitted as
    /// JSON numbers.
    #[must_use]
    pub fn to_json_value(&self, numeric_check: bool) -> serde_json::Value {
        use serde_json::Value;
        match self {
            FieldValue::String(s) => {
                if numeric_check {
                    if let Some(number) = parse_numeric(s) {
                        return Value::Number(number);
                    }
                }
                Value::String(s.clone())
            }
            FieldValue::Int(i) => Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Null => Value::Null,
            FieldValue::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| item.to_json_value(numeric_check))
                    .collect(),
            ),
            FieldValue::Map(fields) => Value::Object(fields.to_json_map(numeric_check)),
            FieldValue::Exception(record) => record.to_json_value(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Exception(record) => write!(f, "{}", record),
            FieldValue::Array(_) | FieldValue::Map(_) => {
                write!(f, "{}", self.to_json_value(false))
            }
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Fields> for FieldValue {
    fn from(fields: Fields) -> Self {
        FieldValue::Map(fields)
    }
}

impl From<ExceptionRecord> for FieldValue {
    fn from(record: ExceptionRecord) -> Self {
        FieldValue::Exception(record)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null),
            },
            Value::String(s) => FieldValue::String(s),
            Value::Array(items) => {
                FieldValue::Array(items.into_iter().map(FieldValue::from).collect())
            }
            Value::Object(map) => FieldValue::Map(map.into_iter().collect()),
        }
    }
}

/// Insertion-ordered set of named fields.
///
/// Inserting an existing key replaces its value in place, so the key keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    /// Create a new empty field set
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a field (builder version)
    #[must_use]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Merge `other` into this set; `other` wins on duplicate keys.
    pub fn merge(&mut self, other: &Fields) {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
    }

    /// Build a JSON object preserving field order
    pub fn to_json_map(&self, numeric_check: bool) -> serde_json::Map<String, serde_json::Value> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json_value(numeric_check)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serializable view of a caught error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionRecord {
    pub code: i64,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub trace: String,
}

impl ExceptionRecord {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            file: String::new(),
            line: 0,
            trace: String::new(),
        }
    }

    /// Build a record from an error.
    ///
    /// The location is the caller's. The code is the OS error code for IO
    /// errors and 0 otherwise; the trace lists the `source()` chain.
    #[track_caller]
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let location = Location::caller();
        let code = err
            .downcast_ref::<std::io::Error>()
            .and_then(std::io::Error::raw_os_error)
            .map(i64::from)
            .unwrap_or(0);

        let mut trace = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            trace.push(format!("#{} {}", trace.len(), cause));
            source = cause.source();
        }

        Self {
            code,
            message: err.to_string(),
            file: location.file().to_string(),
            line: location.line(),
            trace: trace.join("\n"),
        }
    }

    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl fmt::Display for ExceptionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}:{}", self.message, self.file, self.line)
    }
}

/// Parse a numeric-looking string into a JSON number.
///
/// Accepts an optional sign, digits with an optional fraction and an
/// optional exponent, with surrounding whitespace ignored. Integers that fit
/// `i64` stay integers.
pub fn parse_numeric(s: &str) -> Option<serde_json::Number> {
    let s = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_from(i);
    let mut digit_count = int_end - i;
    let mut is_float = false;
    i = int_end;

    if i < bytes.len() && bytes[i] == b'.' {
        is_float = true;
        let frac_end = digits_from(i + 1);
        digit_count += frac_end - (i + 1);
        i = frac_end;
    }
    if digit_count == 0 {
        return None;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        is_float = true;
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end == i {
            return None;
        }
        i = exp_end;
    }
    if i != bytes.len() {
        return None;
    }

    if !is_float {
        if let Ok(int) = s.parse::<i64>() {
            return Some(int.into());
        }
    }
    s.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
}
