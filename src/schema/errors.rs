//! Validation error types.
//!
//! A failed validation carries every field violation found, in schema
//! declaration order, so clients see the whole shape problem at once.

use std::fmt;

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationDetails {
    /// Field name (or `$root` for a non-object body)
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: "missing".into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// Validation failure for a request body.
#[derive(Debug, Clone)]
pub struct SchemaError {
    message: String,
    violations: Vec<ValidationDetails>,
}

impl SchemaError {
    /// A body that failed field validation.
    pub fn validation_failed(violations: Vec<ValidationDetails>) -> Self {
        let summary = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            message: format!("movie validation failed: {}", summary),
            violations,
        }
    }

    /// A body that passed field validation but could not be decoded.
    pub fn decode(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            message: format!("movie decode failed: {}", reason),
            violations: vec![ValidationDetails::new("$root", "movie record", reason)],
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn violations(&self) -> &[ValidationDetails] {
        &self.violations
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_display() {
        let details = ValidationDetails::type_mismatch("rating", "float", "string");
        let display = format!("{}", details);
        assert!(display.contains("rating"));
        assert!(display.contains("float"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_error_joins_all_violations() {
        let err = SchemaError::validation_failed(vec![
            ValidationDetails::missing_field("rating", "float"),
            ValidationDetails::type_mismatch("id", "int", "string"),
        ]);

        let display = format!("{}", err);
        assert!(display.contains("rating"));
        assert!(display.contains("id"));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_details_serialize_shape() {
        let details = ValidationDetails::missing_field("title", "string");
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["field"], "title");
        assert_eq!(json["actual"], "missing");
    }
}
