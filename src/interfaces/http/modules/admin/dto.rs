//! Admin DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Event, RegistrationRecord};
use crate::shared::dates;

/// One row of the administrative registration listing,
/// the six display columns of the review table
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationRow {
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    /// Category display label
    pub category: String,
    /// Submission timestamp, e.g. `June 15, 2024 9:05 AM`
    pub submitted_at: String,
}

impl From<RegistrationRecord> for RegistrationRow {
    fn from(record: RegistrationRecord) -> Self {
        let r = record.registration;
        Self {
            full_name: r.full_name,
            email: r.email,
            college_name: r.college_name,
            department: r.department,
            category: r.category.label().to_string(),
            submitted_at: dates::datetime_label(r.created_at),
        }
    }
}

/// Registration listing with its total
#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationListResponse {
    pub count: u64,
    pub rows: Vec<RegistrationRow>,
}

/// Full event record for administrative review
#[derive(Debug, Serialize, ToSchema)]
pub struct EventSummary {
    pub id: i32,
    pub event_name: String,
    /// Stored form, e.g. `one_day_workshop`
    pub category: String,
    /// Display form, e.g. `One-day Workshop`
    pub category_label: String,
    /// `YYYY-MM-DD`
    pub event_date: String,
    pub registration_start_date: String,
    pub registration_end_date: String,
}

impl From<Event> for EventSummary {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            event_name: e.name,
            category_label: e.category.label().to_string(),
            category: e.category.as_str().to_string(),
            event_date: dates::date_machine(e.event_date),
            registration_start_date: dates::date_machine(e.registration_start),
            registration_end_date: dates::date_machine(e.registration_end),
        }
    }
}

/// Event creation body. All three dates are required; their ordering is
/// enforced by the write service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 150, message = "event name is required"))]
    pub event_name: String,
    #[validate(length(min = 1, max = 50, message = "category is required"))]
    pub category: String,
    /// `YYYY-MM-DD`
    pub event_date: NaiveDate,
    pub registration_start_date: NaiveDate,
    pub registration_end_date: NaiveDate,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateEventResponse {
    /// Id of the new event
    pub id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventsOnDateQuery {
    /// Event date, `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RegistrationsQuery {
    /// Restrict to one event; omit for all registrations
    pub event_id: Option<i32>,
}
