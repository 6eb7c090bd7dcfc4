//! Availability DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{EventCategory, EventRef};
use crate::shared::dates;

/// A selectable category with its display label
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryOption {
    /// Stored form, e.g. `one_day_workshop`
    pub value: String,
    /// Display form, e.g. `One-day Workshop`
    pub label: String,
}

impl From<EventCategory> for CategoryOption {
    fn from(category: EventCategory) -> Self {
        Self {
            label: category.label().to_string(),
            value: category.as_str().to_string(),
        }
    }
}

/// A selectable event date with its display label
#[derive(Debug, Serialize, ToSchema)]
pub struct DateOption {
    /// Machine form, `YYYY-MM-DD`
    pub date: String,
    /// Display form, e.g. `July 10, 2024`
    pub label: String,
}

impl From<chrono::NaiveDate> for DateOption {
    fn from(date: chrono::NaiveDate) -> Self {
        Self {
            date: dates::date_machine(date),
            label: dates::date_label(date),
        }
    }
}

/// A selectable event
#[derive(Debug, Serialize, ToSchema)]
pub struct EventOption {
    pub id: i32,
    pub name: String,
}

impl From<EventRef> for EventOption {
    fn from(r: EventRef) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DatesQuery {
    /// Category in its stored form
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventsQuery {
    /// Category in its stored form
    pub category: Option<String>,
    /// Event date, `YYYY-MM-DD`
    pub date: Option<String>,
}
