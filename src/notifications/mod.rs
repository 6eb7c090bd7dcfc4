//! Notifications module
//!
//! Publishes registration notifications on an in-process event bus.
//! Mail transports subscribe to the bus and render/deliver the actual
//! messages; the write path only decides what gets produced.
//!
//! # Features
//! - Event bus for pub/sub messaging
//! - `NotificationDispatcher` port consumed by the registration write path
//! - Per-channel enable switches and admin mailbox configuration
//!
//! # Usage
//! ```ignore
//! use event_registration::notifications::{
//!     create_event_bus, BusNotificationDispatcher, NotificationSettings,
//! };
//!
//! let bus = create_event_bus();
//! let dispatcher = BusNotificationDispatcher::new(bus.clone(), NotificationSettings::default());
//! let mut subscriber = bus.subscribe();
//! ```

pub mod dispatcher;
pub mod event_bus;
pub mod events;

pub use dispatcher::{BusNotificationDispatcher, NotificationDispatcher, NotificationSettings};
pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use events::*;
