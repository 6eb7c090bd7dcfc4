//! Event repository interface

use async_trait::async_trait;
use chrono::NaiveDate;

use super::model::{Event, EventCategory, EventRef, NewEvent};
use crate::domain::DomainResult;

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persist a new event and return its assigned id.
    async fn save(&self, event: NewEvent) -> DomainResult<i32>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Event>>;

    /// All events, ordered by event date ascending.
    async fn find_all(&self) -> DomainResult<Vec<Event>>;

    /// Events whose registration window contains `today`.
    async fn find_open(&self, today: NaiveDate) -> DomainResult<Vec<Event>>;

    /// Distinct event dates of open events in one category, ascending.
    async fn find_open_dates(
        &self,
        category: &EventCategory,
        today: NaiveDate,
    ) -> DomainResult<Vec<NaiveDate>>;

    /// Open events matching category and exact event date, ordered by name.
    async fn find_open_on_date(
        &self,
        category: &EventCategory,
        date: NaiveDate,
        today: NaiveDate,
    ) -> DomainResult<Vec<EventRef>>;

    /// Distinct event dates across all events, descending.
    async fn distinct_event_dates(&self) -> DomainResult<Vec<NaiveDate>>;

    /// All events on a date regardless of window state, ordered by name.
    async fn find_refs_on_date(&self, date: NaiveDate) -> DomainResult<Vec<EventRef>>;
}
