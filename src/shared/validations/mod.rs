//! Input validation helpers shared by the write services and the HTTP layer.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

/// Character class accepted for registration text fields:
/// Unicode letters, digits, whitespace, hyphens, periods.
static TEXT_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}\s\-\.]+$").unwrap());

/// Character class accepted for event names:
/// Unicode letters, digits, whitespace, hyphens, underscores.
static EVENT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}\s\-_]+$").unwrap());

pub fn is_valid_text_field(value: &str) -> bool {
    !value.is_empty() && TEXT_FIELD_RE.is_match(value)
}

pub fn is_valid_event_name(value: &str) -> bool {
    !value.is_empty() && EVENT_NAME_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}
