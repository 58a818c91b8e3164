//! # HTTP API Errors
//!
//! Error types for the movie API, with HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{SchemaError, ValidationDetails};

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Movie API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Id-keyed operation found no matching record; the payload names the
    /// failing operation (GET, PUT, DELETE)
    #[error("Movie not found ({0})")]
    NotFound(&'static str),

    /// Request body failed movie schema validation
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Store lock poisoned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 Not Found
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            // 422 Unprocessable Entity
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    /// Field-level detail, present on validation failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ValidationDetails>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let code = err.status_code().as_u16();
        let details = match &err {
            ApiError::Validation(schema_err) => schema_err.violations().to_vec(),
            _ => Vec::new(),
        };
        Self {
            error: err.to_string(),
            code,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate_movie;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::NotFound("GET").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_maps_to_422() {
        let schema_err = validate_movie(&json!({})).unwrap_err();
        let api_err = ApiError::from(schema_err);
        assert_eq!(api_err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_names_operation() {
        let err = ApiError::NotFound("DELETE");
        assert!(err.to_string().contains("DELETE"));
    }

    #[test]
    fn test_error_response_carries_details() {
        let schema_err = validate_movie(&json!({"id": "not an int"})).unwrap_err();
        let response = ErrorResponse::from(ApiError::from(schema_err));

        assert_eq!(response.code, 422);
        assert!(!response.details.is_empty());
        assert_eq!(response.details[0].field, "id");
    }

    #[test]
    fn test_not_found_response_omits_details() {
        let response = ErrorResponse::from(ApiError::NotFound("GET"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 404);
        assert!(json.get("details").is_none());
    }
}
