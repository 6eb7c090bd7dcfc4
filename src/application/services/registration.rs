//! Registration write path

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{error, info};

use crate::domain::{DomainError, DomainResult, NewRegistration, RepositoryProvider};
use crate::notifications::{NotificationDispatcher, RegistrationNotice};
use crate::shared::dates;
use crate::shared::errors::FieldViolation;
use crate::shared::validations;

const TEXT_FIELD_MESSAGE: &str =
    "Contains invalid characters. Only letters, numbers, spaces, hyphens, and periods are allowed.";
const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Determines whether an email already holds a registration for a given
/// event date, following the registration's owning event for the date.
pub struct DuplicateGuard {
    repos: Arc<dyn RepositoryProvider>,
}

impl DuplicateGuard {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Errors propagate: an insert must never proceed on an unverified check.
    pub async fn is_duplicate(&self, email: &str, event_date: NaiveDate) -> DomainResult<bool> {
        self.repos
            .registrations()
            .exists_for_email_on_date(email, event_date)
            .await
    }
}

/// Submitted registration attributes, before validation
#[derive(Debug, Clone)]
pub struct RegistrationSubmission {
    pub event_id: i32,
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
}

/// Validates and persists registrations, then hands the enriched payload to
/// the notification dispatcher.
pub struct RegistrationWriteService {
    repos: Arc<dyn RepositoryProvider>,
    duplicates: DuplicateGuard,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl RegistrationWriteService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            duplicates: DuplicateGuard::new(repos.clone()),
            repos,
            dispatcher,
        }
    }

    /// Register for an event. Returns the new registration's id.
    ///
    /// The event must exist and its registration window must contain
    /// `today`. All field violations are collected and returned together.
    /// Notification dispatch happens after the insert and cannot fail the
    /// registration.
    pub async fn register(
        &self,
        submission: RegistrationSubmission,
        today: NaiveDate,
    ) -> DomainResult<i32> {
        let event = self
            .repos
            .events()
            .find_by_id(submission.event_id)
            .await?
            .ok_or(DomainError::EventUnavailable)?;
        if !event.is_open(today) {
            return Err(DomainError::EventUnavailable);
        }

        let mut violations = Vec::new();
        for (field, value) in [
            ("full_name", &submission.full_name),
            ("college_name", &submission.college_name),
            ("department", &submission.department),
        ] {
            if !validations::is_valid_text_field(value) {
                violations.push(FieldViolation::new(field, TEXT_FIELD_MESSAGE));
            }
        }
        if !validations::is_valid_email(&submission.email) {
            violations.push(FieldViolation::new("email", EMAIL_MESSAGE));
        }
        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        if self
            .duplicates
            .is_duplicate(&submission.email, event.event_date)
            .await?
        {
            return Err(DomainError::DuplicateRegistration);
        }

        let id = self
            .repos
            .registrations()
            .save(NewRegistration {
                full_name: submission.full_name.clone(),
                email: submission.email.clone(),
                college_name: submission.college_name.clone(),
                department: submission.department.clone(),
                category: event.category.clone(),
                event_id: event.id,
                created_at: Local::now().naive_local(),
            })
            .await?;

        info!(
            "Registration saved: id={} email={} event_id={}",
            id, submission.email, event.id
        );

        let notice = RegistrationNotice {
            registration_id: id,
            full_name: submission.full_name,
            email: submission.email,
            college_name: submission.college_name,
            department: submission.department,
            event_name: event.name.clone(),
            event_date_label: dates::date_label(event.event_date),
            category_label: event.category.label().to_string(),
        };
        if let Err(e) = self.dispatcher.dispatch(notice).await {
            error!("Notification dispatch failed for registration {}: {}", id, e);
        }

        Ok(id)
    }
}
