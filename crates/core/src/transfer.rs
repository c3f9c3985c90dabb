//! Bulk export/import payload handling.
//!
//! An export is a flat JSON array of item records. Import accepts the same
//! shape and replaces the whole store, so the payload is fully decoded and
//! validated before anything is deleted.

use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// Upper bound on records accepted in one import.
pub const MAX_IMPORT_RECORDS: usize = 50_000;

/// Decode an import payload into typed records.
///
/// The payload must be a JSON array; each element must decode into `T`.
/// Errors name the offending index so the operator can fix the file.
pub fn parse_import_payload<T: DeserializeOwned>(
    payload: serde_json::Value,
) -> Result<Vec<T>, CoreError> {
    let serde_json::Value::Array(entries) = payload else {
        return Err(CoreError::Validation(format!(
            "Import payload must be a JSON array of items (got {})",
            json_kind(&payload)
        )));
    };

    if entries.len() > MAX_IMPORT_RECORDS {
        return Err(CoreError::Validation(format!(
            "Import payload exceeds maximum of {MAX_IMPORT_RECORDS} items (got {})",
            entries.len()
        )));
    }

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            serde_json::from_value(entry)
                .map_err(|e| CoreError::Validation(format!("Invalid item at index {idx}: {e}")))
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
