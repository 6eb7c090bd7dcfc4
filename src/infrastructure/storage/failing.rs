//! Always-failing repository provider, used to exercise fail-soft read paths.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::event::{Event, EventCategory, EventRef, EventRepository, NewEvent};
use crate::domain::registration::{NewRegistration, RegistrationRecord, RegistrationRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

pub(crate) struct FailingRepositoryProvider;

fn offline<T>() -> DomainResult<T> {
    Err(DomainError::Storage("storage offline".to_string()))
}

impl RepositoryProvider for FailingRepositoryProvider {
    fn events(&self) -> &dyn EventRepository {
        self
    }

    fn registrations(&self) -> &dyn RegistrationRepository {
        self
    }
}

#[async_trait]
impl EventRepository for FailingRepositoryProvider {
    async fn save(&self, _event: NewEvent) -> DomainResult<i32> {
        offline()
    }

    async fn find_by_id(&self, _id: i32) -> DomainResult<Option<Event>> {
        offline()
    }

    async fn find_all(&self) -> DomainResult<Vec<Event>> {
        offline()
    }

    async fn find_open(&self, _today: NaiveDate) -> DomainResult<Vec<Event>> {
        offline()
    }

    async fn find_open_dates(
        &self,
        _category: &EventCategory,
        _today: NaiveDate,
    ) -> DomainResult<Vec<NaiveDate>> {
        offline()
    }

    async fn find_open_on_date(
        &self,
        _category: &EventCategory,
        _date: NaiveDate,
        _today: NaiveDate,
    ) -> DomainResult<Vec<EventRef>> {
        offline()
    }

    async fn distinct_event_dates(&self) -> DomainResult<Vec<NaiveDate>> {
        offline()
    }

    async fn find_refs_on_date(&self, _date: NaiveDate) -> DomainResult<Vec<EventRef>> {
        offline()
    }
}

#[async_trait]
impl RegistrationRepository for FailingRepositoryProvider {
    async fn save(&self, _registration: NewRegistration) -> DomainResult<i32> {
        offline()
    }

    async fn exists_for_email_on_date(
        &self,
        _email: &str,
        _event_date: NaiveDate,
    ) -> DomainResult<bool> {
        offline()
    }

    async fn find_records_for_event(
        &self,
        _event_id: i32,
    ) -> DomainResult<Vec<RegistrationRecord>> {
        offline()
    }

    async fn count_for_event(&self, _event_id: i32) -> DomainResult<u64> {
        offline()
    }

    async fn find_all_records(
        &self,
        _event_id: Option<i32>,
    ) -> DomainResult<Vec<RegistrationRecord>> {
        offline()
    }
}
