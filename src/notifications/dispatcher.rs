//! Notification dispatch seam between the registration write path and
//! whatever mail transport is attached to the bus.

use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;

use super::event_bus::SharedEventBus;
use super::events::{Event, MailEvent, RegistrationNotice};
use crate::shared::errors::NotificationError;

/// Settings controlling which notifications are produced.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Admin mailbox receiving a copy of each registration.
    /// Empty disables the admin copy.
    pub admin_email: String,
    pub notify_admin: bool,
    pub notify_user: bool,
    /// Site name used in notification subjects
    pub site_name: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            admin_email: String::new(),
            notify_admin: true,
            notify_user: true,
            site_name: "Event Registration".to_string(),
        }
    }
}

/// Outbound notification port consumed by the registration write path.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Dispatch notifications for a persisted registration.
    ///
    /// The registration is durable regardless of the outcome here; callers
    /// log a failure and move on.
    async fn dispatch(&self, notice: RegistrationNotice) -> Result<(), NotificationError>;
}

/// Dispatcher publishing mail-shaped events on the in-process bus.
pub struct BusNotificationDispatcher {
    bus: SharedEventBus,
    settings: NotificationSettings,
}

impl BusNotificationDispatcher {
    pub fn new(bus: SharedEventBus, settings: NotificationSettings) -> Self {
        Self { bus, settings }
    }
}

#[async_trait]
impl NotificationDispatcher for BusNotificationDispatcher {
    async fn dispatch(&self, notice: RegistrationNotice) -> Result<(), NotificationError> {
        if self.settings.notify_user {
            self.bus.publish(Event::UserConfirmation(MailEvent {
                to: notice.email.clone(),
                subject: format!("Registration Confirmation - {}", self.settings.site_name),
                registration: notice.clone(),
            }));
            info!("User confirmation queued for {}", notice.email);
        }

        if self.settings.notify_admin {
            if self.settings.admin_email.is_empty() {
                warn!("Admin notification enabled but no admin email configured");
            } else {
                self.bus.publish(Event::AdminNotification(MailEvent {
                    to: self.settings.admin_email.clone(),
                    subject: format!("New Event Registration - {}", self.settings.site_name),
                    registration: notice,
                }));
                info!(
                    "Admin notification queued for {}",
                    self.settings.admin_email
                );
            }
        }

        Ok(())
    }
}
