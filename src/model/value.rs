//! Classification of dynamic inputs.
//!
//! Dynamic entry points accept `serde_json::Value`. Every value is mapped onto a
//! closed set of kinds so type checks are explicit and error messages can name
//! what was actually received.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// The fundamental kind of a dynamic input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Absent value (`null`).
    Null,
    /// `true` or `false`.
    Bool,
    /// Integer or floating point number.
    Number,
    /// A string.
    Text,
    /// An ordered array.
    List,
    /// A key/value object.
    Map,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Map,
        }
    }

    /// Lowercase name used in error messages and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
