//! Episode date parsing.
//!
//! Item dates come from hand-written manifests, so besides full RFC 3339
//! timestamps a few looser forms are accepted. Dates without an offset are
//! taken as UTC.
//!
//! ```ignore
//! parse_date("2024-06-15T14:30:45+02:00");
//! parse_date("2024-06-15T14:30:45.123Z");
//! parse_date("2024-06-15 14:30");
//! parse_date("Sat, 15 Jun 2024 14:30:45 GMT");
//! parse_date("2024-06-15");
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Offset-less datetime layouts, tried in order.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an episode date, keeping its UTC offset.
///
/// Returns `None` when no accepted form matches or the date does not exist
/// (e.g. `2023-02-29`).
pub fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive.and_utc().fixed_offset());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }

    // Date only: midnight UTC
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}
