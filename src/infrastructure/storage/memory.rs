//! In-memory storage implementation

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;

use crate::domain::event::{Event, EventCategory, EventRef, EventRepository, NewEvent};
use crate::domain::registration::{
    NewRegistration, Registration, RegistrationRecord, RegistrationRepository,
};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

/// In-memory repository provider for development and testing
pub struct InMemoryRepositoryProvider {
    events: DashMap<i32, Event>,
    registrations: DashMap<i32, Registration>,
    event_counter: AtomicI32,
    registration_counter: AtomicI32,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            events: DashMap::new(),
            registrations: DashMap::new(),
            event_counter: AtomicI32::new(1),
            registration_counter: AtomicI32::new(1),
        }
    }

    fn event_refs_sorted(&self, mut refs: Vec<EventRef>) -> Vec<EventRef> {
        refs.sort_by(|a, b| a.name.cmp(&b.name));
        refs
    }

    fn records_sorted(&self, mut records: Vec<RegistrationRecord>) -> Vec<RegistrationRecord> {
        records.sort_by(|a, b| {
            b.registration
                .created_at
                .cmp(&a.registration.created_at)
                .then(b.registration.id.cmp(&a.registration.id))
        });
        records
    }

    fn record_for(&self, registration: Registration) -> Option<RegistrationRecord> {
        let event = self.events.get(&registration.event_id)?;
        Some(RegistrationRecord {
            event_name: event.name.clone(),
            event_date: event.event_date,
            registration,
        })
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn events(&self) -> &dyn EventRepository {
        self
    }

    fn registrations(&self) -> &dyn RegistrationRepository {
        self
    }
}

#[async_trait]
impl EventRepository for InMemoryRepositoryProvider {
    async fn save(&self, event: NewEvent) -> DomainResult<i32> {
        let id = self.event_counter.fetch_add(1, Ordering::SeqCst);
        self.events.insert(
            id,
            Event {
                id,
                name: event.name,
                category: event.category,
                event_date: event.event_date,
                registration_start: event.registration_start,
                registration_end: event.registration_end,
                created_at: event.created_at,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Event>> {
        Ok(self.events.get(&id).map(|e| e.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Event>> {
        let mut events: Vec<Event> = self.events.iter().map(|e| e.clone()).collect();
        events.sort_by(|a, b| a.event_date.cmp(&b.event_date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn find_open(&self, today: NaiveDate) -> DomainResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.is_open(today))
            .map(|e| e.clone())
            .collect();
        events.sort_by(|a, b| a.event_date.cmp(&b.event_date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn find_open_dates(
        &self,
        category: &EventCategory,
        today: NaiveDate,
    ) -> DomainResult<Vec<NaiveDate>> {
        let dates: BTreeSet<NaiveDate> = self
            .events
            .iter()
            .filter(|e| e.category == *category && e.is_open(today))
            .map(|e| e.event_date)
            .collect();
        Ok(dates.into_iter().collect())
    }

    async fn find_open_on_date(
        &self,
        category: &EventCategory,
        date: NaiveDate,
        today: NaiveDate,
    ) -> DomainResult<Vec<EventRef>> {
        let refs = self
            .events
            .iter()
            .filter(|e| e.category == *category && e.event_date == date && e.is_open(today))
            .map(|e| EventRef {
                id: e.id,
                name: e.name.clone(),
            })
            .collect();
        Ok(self.event_refs_sorted(refs))
    }

    async fn distinct_event_dates(&self) -> DomainResult<Vec<NaiveDate>> {
        let dates: BTreeSet<NaiveDate> = self.events.iter().map(|e| e.event_date).collect();
        Ok(dates.into_iter().rev().collect())
    }

    async fn find_refs_on_date(&self, date: NaiveDate) -> DomainResult<Vec<EventRef>> {
        let refs = self
            .events
            .iter()
            .filter(|e| e.event_date == date)
            .map(|e| EventRef {
                id: e.id,
                name: e.name.clone(),
            })
            .collect();
        Ok(self.event_refs_sorted(refs))
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRepositoryProvider {
    async fn save(&self, registration: NewRegistration) -> DomainResult<i32> {
        // Mirrors the unique (email, event_id) index the database carries
        let duplicate = self.registrations.iter().any(|r| {
            r.email == registration.email && r.event_id == registration.event_id
        });
        if duplicate {
            return Err(DomainError::DuplicateRegistration);
        }

        let id = self.registration_counter.fetch_add(1, Ordering::SeqCst);
        self.registrations.insert(
            id,
            Registration {
                id,
                full_name: registration.full_name,
                email: registration.email,
                college_name: registration.college_name,
                department: registration.department,
                category: registration.category,
                event_id: registration.event_id,
                created_at: registration.created_at,
            },
        );
        Ok(id)
    }

    async fn exists_for_email_on_date(
        &self,
        email: &str,
        event_date: NaiveDate,
    ) -> DomainResult<bool> {
        Ok(self.registrations.iter().any(|r| {
            r.email == email
                && self
                    .events
                    .get(&r.event_id)
                    .map_or(false, |e| e.event_date == event_date)
        }))
    }

    async fn find_records_for_event(
        &self,
        event_id: i32,
    ) -> DomainResult<Vec<RegistrationRecord>> {
        let records = self
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .filter_map(|r| self.record_for(r.clone()))
            .collect();
        Ok(self.records_sorted(records))
    }

    async fn count_for_event(&self, event_id: i32) -> DomainResult<u64> {
        Ok(self
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .count() as u64)
    }

    async fn find_all_records(
        &self,
        event_id: Option<i32>,
    ) -> DomainResult<Vec<RegistrationRecord>> {
        let records = self
            .registrations
            .iter()
            .filter(|r| event_id.map_or(true, |id| r.event_id == id))
            .filter_map(|r| self.record_for(r.clone()))
            .collect();
        Ok(self.records_sorted(records))
    }
}
