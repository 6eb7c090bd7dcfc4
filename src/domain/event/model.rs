//! Event domain entity

use chrono::{NaiveDate, NaiveDateTime};

/// Event category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventCategory {
    OnlineWorkshop,
    Hackathon,
    Conference,
    OneDayWorkshop,
    /// Value outside the canonical set, preserved as stored
    Other(String),
}

impl EventCategory {
    /// The canonical categories, in presentation order.
    pub const CANONICAL: [EventCategory; 4] = [
        EventCategory::OnlineWorkshop,
        EventCategory::Hackathon,
        EventCategory::Conference,
        EventCategory::OneDayWorkshop,
    ];

    /// Storage form of the category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnlineWorkshop => "online_workshop",
            Self::Hackathon => "hackathon",
            Self::Conference => "conference",
            Self::OneDayWorkshop => "one_day_workshop",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a stored value. Unknown values are kept as `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "online_workshop" => Self::OnlineWorkshop,
            "hackathon" => Self::Hackathon,
            "conference" => Self::Conference,
            "one_day_workshop" => Self::OneDayWorkshop,
            other => Self::Other(other.to_string()),
        }
    }

    /// Human-readable label. `Other` values fall back to their raw form.
    pub fn label(&self) -> &str {
        match self {
            Self::OnlineWorkshop => "Online Workshop",
            Self::Hackathon => "Hackathon",
            Self::Conference => "Conference",
            Self::OneDayWorkshop => "One-day Workshop",
            Self::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scheduled event with its registration window
#[derive(Debug, Clone)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub category: EventCategory,
    /// Date the event takes place
    pub event_date: NaiveDate,
    /// First day registrations are accepted
    pub registration_start: NaiveDate,
    /// Last day registrations are accepted
    pub registration_end: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Event {
    /// Whether the registration window contains `today`.
    /// Both bounds are inclusive; there is no stored open/closed flag.
    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.registration_start <= today && today <= self.registration_end
    }
}

/// Event attributes supplied at creation, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub category: EventCategory,
    pub event_date: NaiveDate,
    pub registration_start: NaiveDate,
    pub registration_end: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Id/name pair for pick lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRef {
    pub id: i32,
    pub name: String,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_event() -> Event {
        Event {
            id: 1,
            name: "Rust Hack Day".into(),
            category: EventCategory::Hackathon,
            event_date: date(2024, 7, 10),
            registration_start: date(2024, 6, 1),
            registration_end: date(2024, 7, 5),
            created_at: date(2024, 5, 20).and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn open_on_start_date() {
        assert!(sample_event().is_open(date(2024, 6, 1)));
    }

    #[test]
    fn open_on_end_date() {
        assert!(sample_event().is_open(date(2024, 7, 5)));
    }

    #[test]
    fn closed_day_before_start() {
        assert!(!sample_event().is_open(date(2024, 5, 31)));
    }

    #[test]
    fn closed_day_after_end() {
        assert!(!sample_event().is_open(date(2024, 7, 6)));
    }

    #[test]
    fn open_mid_window() {
        assert!(sample_event().is_open(date(2024, 6, 15)));
    }

    #[test]
    fn category_parse_round_trip() {
        for cat in EventCategory::CANONICAL {
            assert_eq!(EventCategory::parse(cat.as_str()), cat);
        }
    }

    #[test]
    fn category_parse_keeps_unknown_values() {
        let cat = EventCategory::parse("bootcamp");
        assert_eq!(cat, EventCategory::Other("bootcamp".to_string()));
        assert_eq!(cat.as_str(), "bootcamp");
        assert_eq!(cat.label(), "bootcamp");
    }

    #[test]
    fn category_labels() {
        assert_eq!(EventCategory::OnlineWorkshop.label(), "Online Workshop");
        assert_eq!(EventCategory::Hackathon.label(), "Hackathon");
        assert_eq!(EventCategory::Conference.label(), "Conference");
        assert_eq!(EventCategory::OneDayWorkshop.label(), "One-day Workshop");
    }

    #[test]
    fn category_display_is_storage_form() {
        assert_eq!(EventCategory::OneDayWorkshop.to_string(), "one_day_workshop");
    }
}
