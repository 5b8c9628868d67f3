//! Timestamp normalization
//!
//! Event logs mix timestamp shapes: offset-aware ISO 8601 from one writer,
//! naive `isoformat()` output from another, occasionally a bare date. Every
//! accepted shape resolves to a UTC instant; naive values are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Offset-aware formats tried after RFC 3339.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z", // 2024-01-15T09:30:00.5+05:30
    "%Y-%m-%d %H:%M:%S%.f%:z", // 2024-01-15 09:30:00+05:30
    "%Y-%m-%dT%H:%M:%S%.f%z",  // 2024-01-15T09:30:00+0530
    "%Y-%m-%d %H:%M:%S%.f%z",  // 2024-01-15 09:30:00+0530
];

/// Naive formats, interpreted as UTC.
const NAIVE_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f", // 2024-01-15T09:30:00.123456
    "%Y-%m-%d %H:%M:%S%.f", // 2024-01-15 09:30:00
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M", // 2024-01-15T09:30
    "%Y-%m-%d %H:%M", // 2024-01-15 09:30
];

/// Resolve a raw timestamp string to a UTC instant.
///
/// Returns `None` when no supported shape matches.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    // RFC 3339 with a space separator, e.g. "2024-01-15 09:30:00Z"
    if let Ok(ts) = DateTime::parse_from_rfc3339(&s.replacen(' ', "T", 1)) {
        return Some(ts.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(ts) = DateTime::parse_from_str(s, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(ts.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
