//! Notification events
//!
//! Defines the event types published for downstream mail transports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Enriched registration payload carried by every notification.
///
/// Dates are pre-formatted display labels so transports render them
/// consistently with the rest of the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationNotice {
    pub registration_id: i32,
    pub full_name: String,
    pub email: String,
    pub college_name: String,
    pub department: String,
    pub event_name: String,
    /// e.g. `July 10, 2024`
    pub event_date_label: String,
    /// e.g. `Hackathon`
    pub category_label: String,
}

/// Event types for notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// Confirmation addressed to the registrant
    UserConfirmation(MailEvent),
    /// Copy addressed to the configured admin mailbox
    AdminNotification(MailEvent),
}

impl Event {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::UserConfirmation(_) => "user_confirmation",
            Event::AdminNotification(_) => "admin_notification",
        }
    }

    /// Recipient address of this notification
    pub fn recipient(&self) -> &str {
        match self {
            Event::UserConfirmation(e) | Event::AdminNotification(e) => &e.to,
        }
    }

    /// Subject line of this notification
    pub fn subject(&self) -> &str {
        match self {
            Event::UserConfirmation(e) | Event::AdminNotification(e) => &e.subject,
        }
    }
}

/// A mail-shaped notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailEvent {
    pub to: String,
    pub subject: String,
    pub registration: RegistrationNotice,
}

/// Wrapper for sending events with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: Event,
}

impl EventMessage {
    pub fn new(event: Event) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event,
        }
    }
}
