//! Registration repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{NewRegistration, RegistrationRecord};
use crate::domain::DomainResult;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Persist a new registration and return its assigned id.
    ///
    /// A storage-level uniqueness violation on (email, event) must surface
    /// as `DomainError::DuplicateRegistration`, not as a storage error.
    async fn save(&self, registration: NewRegistration) -> DomainResult<i32>;

    /// Whether any registration with this email belongs to an event held
    /// on `event_date`. Email comparison is byte-exact as stored.
    async fn exists_for_email_on_date(
        &self,
        email: &str,
        event_date: NaiveDate,
    ) -> DomainResult<bool>;

    /// Joined records for one event, newest first.
    async fn find_records_for_event(&self, event_id: i32)
        -> DomainResult<Vec<RegistrationRecord>>;

    async fn count_for_event(&self, event_id: i32) -> DomainResult<u64>;

    /// Joined records across all events, newest first,
    /// optionally restricted to one event.
    async fn find_all_records(
        &self,
        event_id: Option<i32>,
    ) -> DomainResult<Vec<RegistrationRecord>>;
}
