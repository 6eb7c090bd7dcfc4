//! Event creation (administrative write path)

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::info;

use crate::domain::{DomainError, DomainResult, EventCategory, NewEvent, RepositoryProvider};
use crate::shared::errors::FieldViolation;
use crate::shared::validations;

const NAME_MESSAGE: &str =
    "Contains invalid characters. Only letters, numbers, spaces, hyphens, and underscores are allowed.";
const START_AFTER_END_MESSAGE: &str =
    "Registration start date must be before or equal to registration end date.";
const END_AFTER_EVENT_MESSAGE: &str =
    "Registration end date must be before or equal to event date.";

/// Event attributes supplied by the administrative form, before validation
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub category: EventCategory,
    pub event_date: NaiveDate,
    pub registration_start: NaiveDate,
    pub registration_end: NaiveDate,
}

/// Creates events, enforcing the date-ordering invariant
/// `registration_start <= registration_end <= event_date` at creation time.
/// Reads never re-validate it.
pub struct EventWriteService {
    repos: Arc<dyn RepositoryProvider>,
}

impl EventWriteService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Persist a new event. Returns the assigned id.
    ///
    /// All violations found are reported together.
    pub async fn create_event(&self, draft: EventDraft) -> DomainResult<i32> {
        let mut violations = Vec::new();
        if !validations::is_valid_event_name(&draft.name) {
            violations.push(FieldViolation::new("event_name", NAME_MESSAGE));
        }
        if draft.registration_start > draft.registration_end {
            violations.push(FieldViolation::new(
                "registration_start_date",
                START_AFTER_END_MESSAGE,
            ));
        }
        if draft.registration_end > draft.event_date {
            violations.push(FieldViolation::new(
                "registration_end_date",
                END_AFTER_EVENT_MESSAGE,
            ));
        }
        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        let id = self
            .repos
            .events()
            .save(NewEvent {
                name: draft.name.clone(),
                category: draft.category,
                event_date: draft.event_date,
                registration_start: draft.registration_start,
                registration_end: draft.registration_end,
                created_at: Local::now().naive_local(),
            })
            .await?;

        info!("Event created: id={} name={}", id, draft.name);
        Ok(id)
    }
}
