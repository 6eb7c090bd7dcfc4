//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::event::EventRepository;
use super::registration::RegistrationRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let event = repos.events().find_by_id(1).await?;
///     let count = repos.registrations().count_for_event(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn events(&self) -> &dyn EventRepository;
    fn registrations(&self) -> &dyn RegistrationRepository;
}
