//! Dynamically typed field values as the host document framework hands them over.
//!
//! Host snapshots are JSON, so every field arrives as a JSON scalar, `null`, or a
//! nested structure (child tables). `FieldValue` keeps those shapes and gives them
//! one emptiness rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single document field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    /// Child tables and nested objects. Never empty, even with no rows.
    Other(Value),
}

impl FieldValue {
    /// Whether the host would consider this value "not filled in".
    ///
    /// Empty values:
    /// - `Null`
    /// - `Bool(false)`
    /// - `Number` equal to zero (either sign) or NaN
    /// - `Text("")`
    /// - `Text("0")`: a zero typed into a text field counts as empty too, so a
    ///   link named `0` cannot satisfy a required field.
    ///
    /// Whitespace-only text and empty child tables are *not* empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Bool(b) => !b,
            FieldValue::Number(n) => *n == 0.0 || n.is_nan(),
            FieldValue::Text(s) => s.is_empty() || s == "0",
            FieldValue::Other(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Emptiness of a possibly absent field. Absent counts as empty.
pub fn is_empty_field(value: Option<&FieldValue>) -> bool {
    value.is_none_or(FieldValue::is_empty)
}

/// Render a possibly absent field for interpolation into a message.
///
/// Absent fields render as `undefined`, mirroring what the host UI shows.
pub fn display_field(value: Option<&FieldValue>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "undefined".to_string(),
    }
}

impl core::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => fmt_number(*n, f),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{v}"),
        }
    }
}

// Integral values print without a trailing `.0` (`7`, not `7.0`).
fn fmt_number(n: f64, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => FieldValue::Number(f),
                None => FieldValue::Other(Value::Number(n)),
            },
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Other(other),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Value::from(n as i64)
            }
            FieldValue::Number(n) => serde_json::Number::from_f64(n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            FieldValue::Text(s) => Value::String(s),
            FieldValue::Other(v) => v,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}
