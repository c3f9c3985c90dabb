//! Clothing type catalog rules.
//!
//! Types are short labels (shirt, trousers, suit, ...) offered when
//! registering line items. A type's id is a slug derived from its name.
//! Line items themselves are free-form JSON stored on the clothing item.

use crate::error::CoreError;

/// Maximum length for a type display name (characters).
pub const MAX_TYPE_NAME_LENGTH: usize = 100;

/// Catalog restored by a reset: `(id, name)` pairs.
pub const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("chemise", "Chemise"),
    ("pantalon", "Pantalon"),
    ("costume", "Costume"),
];

/// Derive a type id from its display name: lower-cased, whitespace runs
/// replaced by a single `-`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Validate a type display name.
pub fn validate_type_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Type name must not be empty".into()));
    }
    let len = name.chars().count();
    if len > MAX_TYPE_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Type name exceeds maximum length of {MAX_TYPE_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate the line items attached to a clothing item: a JSON array (or
/// null), one entry per garment.
pub fn validate_line_items(items: &serde_json::Value) -> Result<(), CoreError> {
    match items {
        serde_json::Value::Null | serde_json::Value::Array(_) => Ok(()),
        _ => Err(CoreError::Validation(
            "Line items must be a JSON array".into(),
        )),
    }
}
