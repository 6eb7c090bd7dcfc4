//! Configuration module
//!
//! Layered TOML configuration: every section has working defaults, a config
//! file overrides them, and `DATABASE_URL` overrides the database section.
//! The file is searched at `$EVENT_REGISTRATION_CONFIG`, then
//! `./event-registration.toml`, then the platform config directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::notifications::NotificationSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration, deserialized from TOML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
    pub notifications: NotificationsSection,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
}

impl DatabaseSection {
    /// Effective connection URL; `DATABASE_URL` wins over the file.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.url.clone())
    }
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./registrations.db?mode=rwc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `event_registration=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationsSection {
    pub admin_email: String,
    pub notify_admin: bool,
    pub notify_user: bool,
    pub site_name: String,
}

impl Default for NotificationsSection {
    fn default() -> Self {
        let defaults = NotificationSettings::default();
        Self {
            admin_email: defaults.admin_email,
            notify_admin: defaults.notify_admin,
            notify_user: defaults.notify_user,
            site_name: defaults.site_name,
        }
    }
}

impl From<&NotificationsSection> for NotificationSettings {
    fn from(section: &NotificationsSection) -> Self {
        Self {
            admin_email: section.admin_email.clone(),
            notify_admin: section.notify_admin,
            notify_user: section.notify_user,
            site_name: section.site_name.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Config file search order: `$EVENT_REGISTRATION_CONFIG`, the working
/// directory, then the platform config directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var("EVENT_REGISTRATION_CONFIG") {
        return PathBuf::from(path);
    }
    let local = PathBuf::from("event-registration.toml");
    if local.exists() {
        return local;
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("event-registration")
        .join("config.toml")
}
