//! Common response envelope and error mapping

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::errors::{DomainError, FieldViolation};

/// Standard API response wrapper
///
/// All JSON endpoints return data in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}` with
/// field-level `details` when the failure is addressable per field.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request completed successfully
    pub success: bool,
    /// Payload. `null` on failure
    pub data: Option<T>,
    /// Error description. `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field violations for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
        }
    }

    pub fn validation_error(message: impl Into<String>, details: Vec<FieldViolation>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: Some(details),
        }
    }
}

/// Translate a domain failure into its HTTP shape.
///
/// Validation failures map to 422, the duplicate rule to 409, a missing or
/// closed event to 400, and storage faults to a generic 500 with no
/// internals leaked.
pub fn domain_error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    match e {
        DomainError::Validation(violations) => {
            let message = e_message(&violations);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::validation_error(message, violations)),
            )
        }
        DomainError::DuplicateRegistration => (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(DomainError::DuplicateRegistration.to_string())),
        ),
        DomainError::EventUnavailable => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(DomainError::EventUnavailable.to_string())),
        ),
        DomainError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Registration could not be processed")),
        ),
    }
}

fn e_message(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
