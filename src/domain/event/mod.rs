//! Event aggregate
//!
//! Contains the Event entity, category type, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Event, EventCategory, EventRef, NewEvent};
pub use repository::EventRepository;
