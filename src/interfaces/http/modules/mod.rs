//! Per-resource HTTP modules

pub mod admin;
pub mod availability;
pub mod health;
pub mod metrics;
pub mod registrations;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::services::{
    AdminQueryService, AvailabilityResolver, EventCatalog, EventWriteService,
    RegistrationWriteService,
};
use crate::domain::RepositoryProvider;
use crate::notifications::NotificationDispatcher;

/// Shared state for the registration API routes.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<EventCatalog>,
    pub availability: Arc<AvailabilityResolver>,
    pub registration_writer: Arc<RegistrationWriteService>,
    pub admin_queries: Arc<AdminQueryService>,
    pub event_writer: Arc<EventWriteService>,
}

impl AppState {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            catalog: Arc::new(EventCatalog::new(repos.clone())),
            availability: Arc::new(AvailabilityResolver::new(repos.clone())),
            registration_writer: Arc::new(RegistrationWriteService::new(
                repos.clone(),
                dispatcher,
            )),
            admin_queries: Arc::new(AdminQueryService::new(repos.clone())),
            event_writer: Arc::new(EventWriteService::new(repos)),
        }
    }
}

/// Parse an optional `YYYY-MM-DD` query value. Empty, missing, and
/// malformed values all come back as `None`; the cascade endpoints answer
/// them with an empty list rather than a 4xx.
pub(crate) fn parse_date_param(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Parse an optional category query value; empty means unset.
pub(crate) fn parse_category_param(
    value: Option<&str>,
) -> Option<crate::domain::EventCategory> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    Some(crate::domain::EventCategory::parse(value))
}
