//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::event::EventRepository;
use crate::domain::registration::RegistrationRepository;
use crate::domain::repositories::RepositoryProvider;

use super::event_repository::SeaOrmEventRepository;
use super::registration_repository::SeaOrmRegistrationRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let event = repos.events().find_by_id(1).await?;
/// let count = repos.registrations().count_for_event(1).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    events: SeaOrmEventRepository,
    registrations: SeaOrmRegistrationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            events: SeaOrmEventRepository::new(db.clone()),
            registrations: SeaOrmRegistrationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn events(&self) -> &dyn EventRepository {
        &self.events
    }

    fn registrations(&self) -> &dyn RegistrationRepository {
        &self.registrations
    }
}
