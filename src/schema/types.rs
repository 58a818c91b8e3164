//! Movie schema definition.
//!
//! The service manages a single entity, so the schema is fixed at compile
//! time: seven required fields, each with an exact type.

use serde_json::Value;

/// Supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer (floats are rejected)
    Int,
    /// 64-bit floating point (integers are accepted)
    Float,
}

impl FieldType {
    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Float => "float",
        }
    }

    /// Exact type check against a JSON value.
    ///
    /// No implicit coercion: an int field does not accept floats. A float
    /// field accepts any JSON number.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Int => value.is_i64(),
            FieldType::Float => value.is_number(),
        }
    }
}

/// The movie schema: every field is required.
///
/// Declaration order is the order violations are reported in.
pub const MOVIE_FIELDS: &[(&str, FieldType)] = &[
    ("id", FieldType::Int),
    ("title", FieldType::String),
    ("director", FieldType::String),
    ("releaseDate", FieldType::String),
    ("rating", FieldType::Float),
    ("description", FieldType::String),
    ("posterUrl", FieldType::String),
];

/// Returns the JSON type name of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
