//! Administrative registration queries

use std::sync::Arc;

use log::error;

use crate::domain::{RegistrationRecord, RepositoryProvider};

/// Read-only registration listing for administrative review.
///
/// Same fail-soft policy as the catalog: a storage failure yields an empty
/// result (or zero count) with a logged error.
pub struct AdminQueryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AdminQueryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Registrations for one event joined with its name and date,
    /// newest first.
    pub async fn registrations_for_event(&self, event_id: i32) -> Vec<RegistrationRecord> {
        match self
            .repos
            .registrations()
            .find_records_for_event(event_id)
            .await
        {
            Ok(records) => records,
            Err(e) => {
                error!("Registration listing failed for event_id={}: {}", event_id, e);
                Vec::new()
            }
        }
    }

    pub async fn count_for_event(&self, event_id: i32) -> u64 {
        match self.repos.registrations().count_for_event(event_id).await {
            Ok(count) => count,
            Err(e) => {
                error!("Registration count failed for event_id={}: {}", event_id, e);
                0
            }
        }
    }

    /// All registrations, newest first, optionally restricted to one event.
    pub async fn all_registrations(&self, event_id: Option<i32>) -> Vec<RegistrationRecord> {
        match self.repos.registrations().find_all_records(event_id).await {
            Ok(records) => records,
            Err(e) => {
                error!("Registration listing failed: {}", e);
                Vec::new()
            }
        }
    }
}
