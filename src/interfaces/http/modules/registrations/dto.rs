//! Registration DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::RegistrationSubmission;

/// Registration submission body.
///
/// The extractor checks presence, length, and email syntax; the write
/// service then applies the restricted character class and the duplicate
/// rule.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Id of the chosen event
    pub event_id: i32,
    #[validate(length(min = 1, max = 100, message = "full name is required"))]
    pub full_name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 150, message = "college name is required"))]
    pub college_name: String,
    #[validate(length(min = 1, max = 100, message = "department is required"))]
    pub department: String,
}

impl From<RegisterRequest> for RegistrationSubmission {
    fn from(req: RegisterRequest) -> Self {
        Self {
            event_id: req.event_id,
            full_name: req.full_name,
            email: req.email,
            college_name: req.college_name,
            department: req.department,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Id of the new registration
    pub id: i32,
}
