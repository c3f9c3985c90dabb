//! Parsing of user-supplied date strings.
//!
//! Registration forms send ISO-8601 text: either a full RFC 3339 timestamp
//! or the naive `YYYY-MM-DDTHH:MM` produced by `datetime-local` inputs.
//! Naive values are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Naive layouts accepted after RFC 3339 fails, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 date or date-time string into a UTC timestamp.
pub fn parse_timestamp(input: &str) -> Result<Timestamp, CoreError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(CoreError::Validation(format!(
        "Invalid date format '{trimmed}'. Expected ISO-8601 (e.g. 2024-05-01T14:30)"
    )))
}

/// Parse an optional date string. Blank strings count as absent.
pub fn parse_optional_timestamp(input: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s).map(Some),
    }
}
