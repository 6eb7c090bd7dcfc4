//! # Event Registration Service
//!
//! Time-windowed event registration backend: events open and close for
//! registration purely by date, submissions are validated and de-duplicated,
//! and an administrative surface reviews and exports what came in.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Availability resolution, registration writes, listings, export
//! - **infrastructure**: SeaORM persistence and in-memory storage
//! - **interfaces**: REST API with Swagger documentation
//! - **notifications**: Registration notices on an in-process event bus

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod notifications;
pub mod shared;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;

// Re-export notifications
pub use notifications::{
    create_event_bus, BusNotificationDispatcher, EventBus, NotificationSettings, SharedEventBus,
};
