//! Typed scalar values carried inside a variant map.

use rkyv::{Archive, Deserialize, Serialize};
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A typed value that can be carried in a [`VariantMap`](crate::VariantMap).
///
/// Widths are fixed: a `Uint32` is never read back as a `Uint64` and vice
/// versa. Consumers that expect one width treat the other as a wire error.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize, SerdeSerialize, SerdeDeserialize)]
pub enum Variant {
    /// Boolean value.
    Bool(bool),
    /// 32-bit signed integer.
    Int32(i32),
    /// 32-bit unsigned integer.
    Uint32(u32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit unsigned integer.
    Uint64(u64),
    /// 64-bit floating point.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Array of strings.
    StringArray(Vec<String>),
}

impl Variant {
    /// Type signature of this value, e.g. `"s"` for a string.
    pub fn type_string(&self) -> &'static str {
        match self {
            Variant::Bool(_) => "b",
            Variant::Int32(_) => "i",
            Variant::Uint32(_) => "u",
            Variant::Int64(_) => "x",
            Variant::Uint64(_) => "t",
            Variant::Double(_) => "d",
            Variant::String(_) => "s",
            Variant::StringArray(_) => "as",
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as u32.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Variant::Uint32(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Variant::Uint64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Variant::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Variant::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a JSON value for presentation.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Variant::Bool(b) => serde_json::Value::Bool(*b),
            Variant::Int32(v) => serde_json::Value::from(*v),
            Variant::Uint32(v) => serde_json::Value::from(*v),
            Variant::Int64(v) => serde_json::Value::from(*v),
            Variant::Uint64(v) => serde_json::Value::from(*v),
            Variant::Double(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Variant::String(s) => serde_json::Value::String(s.clone()),
            Variant::StringArray(arr) => serde_json::Value::Array(
                arr.iter()
                    .map(|s| serde_json::Value::String(s.clone()))
                    .collect(),
            ),
        }
    }
}

// Conversion implementations
impl From<bool> for Variant {
    fn from(v: bool) -> Self {
        Variant::Bool(v)
    }
}

impl From<i32> for Variant {
    fn from(v: i32) -> Self {
        Variant::Int32(v)
    }
}

impl From<u32> for Variant {
    fn from(v: u32) -> Self {
        Variant::Uint32(v)
    }
}

impl From<i64> for Variant {
    fn from(v: i64) -> Self {
        Variant::Int64(v)
    }
}

impl From<u64> for Variant {
    fn from(v: u64) -> Self {
        Variant::Uint64(v)
    }
}

impl From<f64> for Variant {
    fn from(v: f64) -> Self {
        Variant::Double(v)
    }
}

impl From<String> for Variant {
    fn from(v: String) -> Self {
        Variant::String(v)
    }
}

impl From<&str> for Variant {
    fn from(v: &str) -> Self {
        Variant::String(v.to_string())
    }
}

impl From<Vec<String>> for Variant {
    fn from(v: Vec<String>) -> Self {
        Variant::StringArray(v)
    }
}
