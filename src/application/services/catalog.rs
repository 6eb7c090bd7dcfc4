//! Event catalog read service

use std::sync::Arc;

use chrono::NaiveDate;
use log::error;

use crate::domain::{Event, EventRef, RepositoryProvider};

/// Read-only facade over the event store.
///
/// Storage failures on these paths degrade to an empty result with a logged
/// error; listing surfaces never see a fault.
pub struct EventCatalog {
    repos: Arc<dyn RepositoryProvider>,
}

impl EventCatalog {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Look up one event. Missing and failed lookups both yield `None`.
    pub async fn get_by_id(&self, id: i32) -> Option<Event> {
        match self.repos.events().find_by_id(id).await {
            Ok(event) => event,
            Err(e) => {
                error!("Event lookup failed for id={}: {}", id, e);
                None
            }
        }
    }

    /// All events, event date ascending.
    pub async fn list_all(&self) -> Vec<Event> {
        match self.repos.events().find_all().await {
            Ok(events) => events,
            Err(e) => {
                error!("Event listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Distinct event dates across all events, newest first.
    pub async fn list_distinct_event_dates(&self) -> Vec<NaiveDate> {
        match self.repos.events().distinct_event_dates().await {
            Ok(dates) => dates,
            Err(e) => {
                error!("Event date listing failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Events held on `date` regardless of window state, name ascending.
    pub async fn list_events_on_date(&self, date: NaiveDate) -> Vec<EventRef> {
        match self.repos.events().find_refs_on_date(date).await {
            Ok(refs) => refs,
            Err(e) => {
                error!("Event listing failed for date={}: {}", date, e);
                Vec::new()
            }
        }
    }
}
