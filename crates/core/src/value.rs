//! Property value types for Lattice
//!
//! This module defines:
//! - Value: closed tagged enum for all property values
//! - ValueKind: the type discriminant served by schemas
//!
//! ## Type Rules
//!
//! - Seven kinds only: Bool, Int, Float, Text, Guid, DateTime, Bytes
//! - No implicit type coercions
//! - `Int(1) != Float(1.0)` - different kinds are NEVER equal
//! - `Bytes` are not `Text`
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//!
//! An absent property has no value at all; there is no Null variant. Reads
//! of absent properties fall back to the schema default.

use crate::timestamp::Timestamp;
use crate::types::RecordUuid;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Canonical property value for all write-path surfaces
///
/// ## Type Equality
///
/// Different kinds are NEVER equal, even if they contain the same "value":
/// - `Int(1) != Float(1.0)`
/// - `Bytes(b"hello") != Text("hello")`
///
/// Float equality follows IEEE-754 semantics:
/// - `NaN != NaN`
/// - `-0.0 == 0.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    Text(String),
    /// UUID value (record references, external keys)
    Guid(RecordUuid),
    /// Point in time (microseconds since epoch)
    DateTime(Timestamp),
    /// Raw bytes
    Bytes(Vec<u8>),
}

// Custom PartialEq implementation for IEEE-754 float semantics
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // IEEE-754: NaN != NaN, -0.0 == 0.0
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Guid(a), Value::Guid(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            // Different kinds are NEVER equal
            _ => false,
        }
    }
}

impl Value {
    /// Get the kind discriminant of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Guid(_) => ValueKind::Guid,
            Value::DateTime(_) => ValueKind::DateTime,
            Value::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Get the kind name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this is a boolean value
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if this is a float value
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Check if this is a numeric value (Int or Float)
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Get the boolean value, if this is a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, if this is a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the text value, if this is a Text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the UUID value, if this is a Guid
    pub fn as_guid(&self) -> Option<RecordUuid> {
        match self {
            Value::Guid(u) => Some(*u),
            _ => None,
        }
    }

    /// Get the timestamp value, if this is a DateTime
    pub fn as_datetime(&self) -> Option<Timestamp> {
        match self {
            Value::DateTime(t) => Some(*t),
            _ => None,
        }
    }

    /// Compare two values of the same kind
    ///
    /// Returns `None` when the kinds differ or when a Float comparison
    /// involves NaN; there is no cross-kind coercion. Guid and Bytes order
    /// bytewise. Used by property assertions.
    pub fn partial_cmp_typed(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Guid(a), Value::Guid(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            (Value::Bytes(a), Value::Bytes(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<RecordUuid> for Value {
    fn from(u: RecordUuid) -> Self {
        Value::Guid(u)
    }
}

impl From<Timestamp> for Value {
    fn from(t: Timestamp) -> Self {
        Value::DateTime(t)
    }
}

/// Type discriminant for [`Value`]
///
/// Schemas declare property kinds with this enum; the validator checks
/// incoming values against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 string
    Text,
    /// UUID
    Guid,
    /// Point in time
    DateTime,
    /// Raw bytes
    Bytes,
}

impl ValueKind {
    /// Get the kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::Text => "Text",
            ValueKind::Guid => "Guid",
            ValueKind::DateTime => "DateTime",
            ValueKind::Bytes => "Bytes",
        }
    }

    /// Check whether this kind supports numeric accumulation
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
