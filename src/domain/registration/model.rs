//! Registration domain entity

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::event::EventCategory;

/// A stored registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    /// Category of the chosen event, copied at submission time
    pub category: EventCategory,
    /// Owning event; event date and category truth live on the event
    pub event_id: i32,
    pub created_at: NaiveDateTime,
}

/// Registration attributes supplied at submission, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    pub category: EventCategory,
    pub event_id: i32,
    pub created_at: NaiveDateTime,
}

/// A registration joined with its owning event's name and date,
/// the shape consumed by admin listings and export
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    pub registration: Registration,
    pub event_name: String,
    pub event_date: NaiveDate,
}
