//! Request-body validation for movie records.
//!
//! Validation semantics:
//! - All seven fields are required
//! - Field types must match exactly (int fields reject floats)
//! - Undeclared fields are ignored
//! - Validation runs at the request boundary, before the store is touched
//! - All violations are collected, in schema declaration order
//!
//! Validation does not mutate the body and is deterministic.

use serde_json::Value;

use crate::catalog::Movie;

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::{json_type_name, MOVIE_FIELDS};

/// Validates a JSON body against the movie schema and decodes it.
///
/// # Errors
///
/// Returns `SchemaError` carrying one `ValidationDetails` per missing or
/// mistyped field.
pub fn validate_movie(body: &Value) -> SchemaResult<Movie> {
    let obj = match body.as_object() {
        Some(obj) => obj,
        None => {
            return Err(SchemaError::validation_failed(vec![
                ValidationDetails::type_mismatch("$root", "object", json_type_name(body)),
            ]))
        }
    };

    let mut violations = Vec::new();

    for (field, field_type) in MOVIE_FIELDS {
        match obj.get(*field) {
            Some(value) => {
                if !field_type.matches(value) {
                    violations.push(ValidationDetails::type_mismatch(
                        *field,
                        field_type.type_name(),
                        json_type_name(value),
                    ));
                }
            }
            None => {
                violations.push(ValidationDetails::missing_field(
                    *field,
                    field_type.type_name(),
                ));
            }
        }
    }

    if !violations.is_empty() {
        return Err(SchemaError::validation_failed(violations));
    }

    serde_json::from_value(body.clone()).map_err(|e| SchemaError::decode(e.to_string()))
}
