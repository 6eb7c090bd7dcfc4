pub mod event;
pub mod registration;
pub mod repositories;

// Re-export commonly used types
pub use event::{Event, EventCategory, EventRef, NewEvent};
pub use registration::{NewRegistration, Registration, RegistrationRecord};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
