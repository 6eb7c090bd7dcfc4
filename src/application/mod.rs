pub mod services;

pub use services::{
    AdminQueryService, AvailabilityResolver, CsvExporter, DuplicateGuard, EventCatalog,
    EventDraft, EventWriteService, RegistrationSubmission, RegistrationWriteService,
};
