use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single user-correctable input problem, addressable by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn violated_fields(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more input fields failed validation. All violations found in a
    /// single pass are carried together, not just the first.
    #[error("Validation failed: {}", violated_fields(.0))]
    Validation(Vec<FieldViolation>),

    #[error("A registration with this email already exists for this event date")]
    DuplicateRegistration,

    #[error("Event does not exist or is not open for registration")]
    EventUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldViolation::new(field, message)])
    }
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Notification dispatch failed: {0}")]
    Dispatch(String),
}
