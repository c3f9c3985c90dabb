//! Owner name canonicalization.
//!
//! Owners are stored upper-cased so that lookups are case-insensitive
//! without relying on collation. Every write and every lookup goes through
//! [`normalize_owner`].

use crate::error::CoreError;

/// Maximum length for an owner name (characters).
pub const MAX_OWNER_LENGTH: usize = 200;

/// Canonical form of an owner name: upper-cased, otherwise untouched.
pub fn normalize_owner(owner: &str) -> String {
    owner.to_uppercase()
}

/// Validate an owner name supplied at registration or import.
pub fn validate_owner(owner: &str) -> Result<(), CoreError> {
    if owner.trim().is_empty() {
        return Err(CoreError::Validation("Owner must not be empty".into()));
    }
    let len = owner.chars().count();
    if len > MAX_OWNER_LENGTH {
        return Err(CoreError::Validation(format!(
            "Owner exceeds maximum length of {MAX_OWNER_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_upper_cases() {
        assert_eq!(normalize_owner("dupont"), "DUPONT");
        assert_eq!(normalize_owner("Jean Dupont"), "JEAN DUPONT");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_owner("Élodie Martin");
        assert_eq!(normalize_owner(&once), once);
    }

    #[test]
    fn lower_and_mixed_case_collapse_to_same_key() {
        assert_eq!(normalize_owner("MARTIN"), normalize_owner("martin"));
        assert_eq!(normalize_owner("MaRtIn"), normalize_owner("martin"));
    }

    #[test]
    fn blank_owner_is_rejected() {
        assert!(validate_owner("").is_err());
        assert!(validate_owner("   ").is_err());
    }

    #[test]
    fn owner_over_limit_is_rejected() {
        assert!(validate_owner(&"a".repeat(MAX_OWNER_LENGTH)).is_ok());
        assert!(validate_owner(&"a".repeat(MAX_OWNER_LENGTH + 1)).is_err());
    }
}
