//! Clothing item status lifecycle.
//!
//! An item moves `received -> cleaned -> delivered`. The dedicated clean and
//! deliver operations stamp the matching date column; the generic status
//! update only rewrites the status string.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a freshly registered item.
pub const STATUS_RECEIVED: &str = "received";
/// The item has been cleaned and is waiting for pickup.
pub const STATUS_CLEANED: &str = "cleaned";
/// The item has been handed back to its owner.
pub const STATUS_DELIVERED: &str = "delivered";

/// All valid item statuses, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[STATUS_RECEIVED, STATUS_CLEANED, STATUS_DELIVERED];

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Status of a clothing item through its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemStatus {
    /// Dropped off at the counter.
    #[default]
    Received,
    /// Cleaned, not yet picked up.
    Cleaned,
    /// Picked up by the owner.
    Delivered,
}

impl ItemStatus {
    /// Parse a status string, rejecting anything outside [`VALID_STATUSES`].
    pub fn parse(status: &str) -> Result<Self, CoreError> {
        match status {
            STATUS_RECEIVED => Ok(Self::Received),
            STATUS_CLEANED => Ok(Self::Cleaned),
            STATUS_DELIVERED => Ok(Self::Delivered),
            other => Err(CoreError::Validation(format!(
                "Invalid item status '{other}'. Must be one of: {VALID_STATUSES:?}"
            ))),
        }
    }

    /// Return the string representation stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => STATUS_RECEIVED,
            Self::Cleaned => STATUS_CLEANED,
            Self::Delivered => STATUS_DELIVERED,
        }
    }

    /// Position in the lifecycle, starting at 0 for `received`.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Received => 0,
            Self::Cleaned => 1,
            Self::Delivered => 2,
        }
    }

    /// Whether moving from `self` to `next` keeps the lifecycle order.
    ///
    /// Staying in the same status counts as forward: repeating a dedicated
    /// transition re-stamps its date.
    pub fn is_forward(&self, next: ItemStatus) -> bool {
        next.rank() >= self.rank()
    }

    /// The date column a dedicated transition into this status stamps.
    pub fn stamped_field(&self) -> Option<TimestampField> {
        match self {
            Self::Received => None,
            Self::Cleaned => Some(TimestampField::DateCleaned),
            Self::Delivered => Some(TimestampField::DateDelivered),
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Timestamp fields
// ---------------------------------------------------------------------------

/// Date columns that a status transition may set to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    DateCleaned,
    DateDelivered,
}

impl TimestampField {
    /// Column name in the `clothing_items` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::DateCleaned => "date_cleaned",
            Self::DateDelivered => "date_delivered",
        }
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    ItemStatus::parse(status).map(|_| ())
}

/// Check that the date columns of a stored record agree with its status.
///
/// A status must carry the date of its own stage, and no stage beyond the
/// status may be dated. `date_cleaned` may be absent on a delivered item
/// that skipped the clean step.
pub fn validate_status_dates(
    status: ItemStatus,
    has_date_cleaned: bool,
    has_date_delivered: bool,
) -> Result<(), CoreError> {
    match status {
        ItemStatus::Cleaned if !has_date_cleaned => Err(CoreError::Validation(
            "Status 'cleaned' requires date_cleaned".into(),
        )),
        ItemStatus::Delivered if !has_date_delivered => Err(CoreError::Validation(
            "Status 'delivered' requires date_delivered".into(),
        )),
        ItemStatus::Received if has_date_cleaned || has_date_delivered => {
            Err(CoreError::Validation(
                "Status 'received' cannot carry date_cleaned or date_delivered".into(),
            ))
        }
        ItemStatus::Cleaned if has_date_delivered => Err(CoreError::Validation(
            "Status 'cleaned' cannot carry date_delivered".into(),
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_rejected_as_validation_error() {
        assert_matches!(ItemStatus::parse("archived"), Err(CoreError::Validation(_)));
        assert_matches!(ItemStatus::parse(""), Err(CoreError::Validation(_)));
        assert_matches!(ItemStatus::parse("Cleaned"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn parse_and_as_str_agree() {
        for s in VALID_STATUSES {
            assert_eq!(ItemStatus::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn default_status_is_received() {
        assert_eq!(ItemStatus::default(), ItemStatus::Received);
    }

    #[test]
    fn forward_moves_follow_lifecycle_order() {
        assert!(ItemStatus::Received.is_forward(ItemStatus::Cleaned));
        assert!(ItemStatus::Cleaned.is_forward(ItemStatus::Delivered));
        assert!(ItemStatus::Received.is_forward(ItemStatus::Delivered));
        assert!(ItemStatus::Cleaned.is_forward(ItemStatus::Cleaned));
    }

    #[test]
    fn backward_moves_are_not_forward() {
        assert!(!ItemStatus::Delivered.is_forward(ItemStatus::Cleaned));
        assert!(!ItemStatus::Delivered.is_forward(ItemStatus::Received));
        assert!(!ItemStatus::Cleaned.is_forward(ItemStatus::Received));
    }

    #[test]
    fn dedicated_transitions_stamp_their_own_column() {
        assert_eq!(ItemStatus::Received.stamped_field(), None);
        assert_eq!(
            ItemStatus::Cleaned.stamped_field().map(|f| f.column()),
            Some("date_cleaned")
        );
        assert_eq!(
            ItemStatus::Delivered.stamped_field().map(|f| f.column()),
            Some("date_delivered")
        );
    }

    #[test]
    fn status_dates_must_match_stage() {
        assert!(validate_status_dates(ItemStatus::Received, false, false).is_ok());
        assert!(validate_status_dates(ItemStatus::Cleaned, true, false).is_ok());
        assert!(validate_status_dates(ItemStatus::Delivered, true, true).is_ok());
        assert!(validate_status_dates(ItemStatus::Delivered, false, true).is_ok());

        assert_matches!(
            validate_status_dates(ItemStatus::Delivered, false, false),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_status_dates(ItemStatus::Cleaned, false, false),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_status_dates(ItemStatus::Received, true, false),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            validate_status_dates(ItemStatus::Cleaned, true, true),
            Err(CoreError::Validation(_))
        );
    }
}
