//! CSV export of registration records
//!
//! Produces the administrative export as a lazy sequence of byte chunks:
//! one chunk for the BOM plus header row, then one chunk per record. The
//! full record set is never materialized as a single buffer.

use std::convert::Infallible;

use chrono::NaiveDateTime;
use futures_util::stream::{self, Stream, StreamExt};

use crate::domain::RegistrationRecord;
use crate::shared::dates;

/// UTF-8 byte-order mark expected by spreadsheet consumers.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

const HEADER: [&str; 9] = [
    "ID",
    "Full Name",
    "Email",
    "College Name",
    "Department",
    "Category",
    "Event Name",
    "Event Date",
    "Submission Date",
];

// ── Field escaping ─────────────────────────────────────────────

/// A field containing the delimiter, a quote, or a line break is wrapped in
/// double quotes with embedded quotes doubled; anything else is written bare.
fn escape_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        let mut escaped = String::with_capacity(value.len() + 2);
        escaped.push('"');
        for c in value.chars() {
            if c == '"' {
                escaped.push('"');
            }
            escaped.push(c);
        }
        escaped.push('"');
        escaped
    } else {
        value.to_string()
    }
}

fn write_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> Vec<u8> {
    let row = fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",");
    let mut bytes = row.into_bytes();
    bytes.extend_from_slice(b"\r\n");
    bytes
}

// ── Exporter ───────────────────────────────────────────────────

/// Serializes registration records into the fixed nine-column CSV layout.
pub struct CsvExporter;

impl CsvExporter {
    /// Byte chunks of the export: BOM + header first, then one row per
    /// record in the order given.
    pub fn export(
        records: Vec<RegistrationRecord>,
    ) -> impl Stream<Item = Result<Vec<u8>, Infallible>> {
        let header = stream::once(async { Ok(Self::header_chunk()) });
        let rows = stream::iter(records.into_iter().map(|r| Ok(Self::row_chunk(&r))));
        header.chain(rows)
    }

    /// Export filename, `event_registrations_<YYYYMMDD_HHMMSS>.csv`.
    pub fn filename(now: NaiveDateTime) -> String {
        format!("event_registrations_{}.csv", now.format("%Y%m%d_%H%M%S"))
    }

    fn header_chunk() -> Vec<u8> {
        let mut chunk = Vec::from(UTF8_BOM);
        chunk.extend_from_slice(&write_row(HEADER));
        chunk
    }

    fn row_chunk(record: &RegistrationRecord) -> Vec<u8> {
        let r = &record.registration;
        write_row([
            r.id.to_string().as_str(),
            &r.full_name,
            &r.email,
            &r.college_name,
            &r.department,
            r.category.label(),
            &record.event_name,
            &dates::date_machine(record.event_date),
            &dates::datetime_machine(r.created_at),
        ])
    }
}
