//! Application services

mod admin;
mod availability;
mod catalog;
mod event_admin;
mod export;
mod registration;

pub use admin::AdminQueryService;
pub use availability::AvailabilityResolver;
pub use catalog::EventCatalog;
pub use event_admin::{EventDraft, EventWriteService};
pub use export::CsvExporter;
pub use registration::{DuplicateGuard, RegistrationSubmission, RegistrationWriteService};
