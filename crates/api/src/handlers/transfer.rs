//! Handlers for bulk export, import and reset of the item store.
//!
//! Import replaces the whole store. The payload is decoded and validated
//! first; only then is the store cleared and each record inserted. The
//! insert loop is not atomic: a database failure midway leaves the records
//! inserted so far.

use std::collections::HashSet;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use pressing_core::error::CoreError;
use pressing_core::transfer::parse_import_payload;
use pressing_db::models::clothing_item::NewClothingItem;
use pressing_db::repositories::ClothingItemRepo;

use super::items::validate_new_item;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Outcome of an import.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    /// Items deleted before importing.
    pub removed: u64,
    /// Items inserted from the payload.
    pub imported: usize,
}

// ---------------------------------------------------------------------------
// GET /items/export
// ---------------------------------------------------------------------------

/// Export every item as a flat list.
pub async fn export_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ClothingItemRepo::list_all(&state.pool).await?;

    tracing::info!(count = items.len(), "Clothing items exported");

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /items/import
// ---------------------------------------------------------------------------

/// Replace the store with the items in the payload.
///
/// Records keep their ids when present; records without one get a fresh id.
pub async fn import_items(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let records: Vec<NewClothingItem> = parse_import_payload(payload)?;

    let mut seen = HashSet::new();
    for (idx, record) in records.iter().enumerate() {
        validate_new_item(record).map_err(|e| match e {
            CoreError::Validation(msg) => {
                CoreError::Validation(format!("Invalid item at index {idx}: {msg}"))
            }
            other => other,
        })?;
        if let Some(id) = record.id {
            if !seen.insert(id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate item id {id} at index {idx}"
                ))
                .into());
            }
        }
    }

    let removed = ClothingItemRepo::clear_all(&state.pool).await?;
    for record in &records {
        ClothingItemRepo::create(&state.pool, record).await?;
    }

    tracing::info!(removed, imported = records.len(), "Clothing items imported");

    Ok(Json(DataResponse {
        data: ImportSummary {
            removed,
            imported: records.len(),
        },
    }))
}

// ---------------------------------------------------------------------------
// DELETE /items
// ---------------------------------------------------------------------------

/// Delete every item.
pub async fn clear_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let removed = ClothingItemRepo::clear_all(&state.pool).await?;

    tracing::warn!(removed, "All clothing items deleted");

    Ok(StatusCode::NO_CONTENT)
}
