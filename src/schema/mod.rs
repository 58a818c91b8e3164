//! Schema validation subsystem for filmdb
//!
//! The movie schema is fixed; validation happens once at the request
//! boundary, decoupled from the web framework's body parsing.
//!
//! # Design Principles
//!
//! - Every declared field is required on create and update
//! - Violations abort the write before the store is touched
//! - No nulls, defaults, or type coercion
//! - Deterministic validation

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult, ValidationDetails};
pub use types::{json_type_name, FieldType, MOVIE_FIELDS};
pub use validator::validate_movie;
