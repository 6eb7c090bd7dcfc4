//! Date and timestamp formatting used across the API, export, and
//! notification payloads.

use chrono::{NaiveDate, NaiveDateTime};

/// Human-readable date label, e.g. `June 15, 2024`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Human-readable timestamp label, e.g. `June 15, 2024 9:05 AM`.
pub fn datetime_label(ts: NaiveDateTime) -> String {
    ts.format("%B %-d, %Y %-I:%M %p").to_string()
}

/// Machine date form (`YYYY-MM-DD`), used by API fields and CSV export.
pub fn date_machine(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Machine timestamp form (`YYYY-MM-DD HH:MM:SS`), used by CSV export.
pub fn datetime_machine(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_labels() {
        assert_eq!(date_label(date(2024, 6, 15)), "June 15, 2024");
        assert_eq!(date_label(date(2024, 1, 3)), "January 3, 2024");
    }

    #[test]
    fn datetime_labels() {
        let ts = date(2024, 6, 15).and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(datetime_label(ts), "June 15, 2024 9:05 AM");
        let evening = date(2024, 6, 15).and_hms_opt(21, 30, 0).unwrap();
        assert_eq!(datetime_label(evening), "June 15, 2024 9:30 PM");
    }

    #[test]
    fn machine_forms() {
        let ts = date(2024, 6, 1).and_hms_opt(0, 0, 7).unwrap();
        assert_eq!(date_machine(date(2024, 6, 1)), "2024-06-01");
        assert_eq!(datetime_machine(ts), "2024-06-01 00:00:07");
    }
}
