//! Deadline and overdue arithmetic.
//!
//! Whole-day differences use integer date subtraction: the fractional part
//! is floored toward negative infinity, so a deadline one hour in the past
//! is `-1` days away, not `0`.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Largest day count accepted for overdue queries and promise defaults.
pub const MAX_DAYS: i64 = 36_500;

/// Validate a day count used in overdue lookups or promise defaults.
pub fn validate_days(days: i64) -> Result<(), CoreError> {
    if !(0..=MAX_DAYS).contains(&days) {
        return Err(CoreError::Validation(format!(
            "Days must be between 0 and {MAX_DAYS} (got {days})"
        )));
    }
    Ok(())
}

/// Items received strictly before this instant are overdue.
pub fn pending_cutoff(now: Timestamp, days: i64) -> Timestamp {
    now - Duration::days(days)
}

/// Whole days from `now` until `promised`, floored.
pub fn days_left(promised: Timestamp, now: Timestamp) -> i64 {
    let remaining = promised - now;
    // `num_days` truncates toward zero.
    let days = remaining.num_days();
    if remaining < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Default promised date for a registration made at `now`.
pub fn default_promised(now: Timestamp, days: i64) -> Timestamp {
    now + Duration::days(days)
}
