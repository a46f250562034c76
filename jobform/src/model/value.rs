//! Value enum for dynamic field values

use std::fmt;

use formdom::AttrValue;
use serde::Deserialize;
use serde::Serialize;

/// A field value as it arrives from the server.
///
/// Job records mix numbers, flags and text; every variant renders as its
/// string form when placed into an attribute.
///
/// # Example
///
/// ```
/// use jobform::model::Value;
///
/// assert_eq!(Value::from(42i64).to_string(), "42");
/// assert_eq!(Value::from(true).to_string(), "true");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&Value> for AttrValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(v) => AttrValue::Bool(*v),
            Value::Int(v) => AttrValue::Int(*v),
            other => AttrValue::Text(other.to_string()),
        }
    }
}
