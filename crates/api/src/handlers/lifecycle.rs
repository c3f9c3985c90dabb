//! Handlers for item status transitions.
//!
//! Two call shapes exist. `clean` and `deliver` move the item and stamp the
//! matching date. The generic status update only rewrites the status string
//! and never touches dates.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use pressing_core::error::CoreError;
use pressing_core::item_status::{ItemStatus, TimestampField};
use pressing_core::types::DbId;
use pressing_db::models::clothing_item::{ClothingItem, UpdateItemStatus};
use pressing_db::repositories::ClothingItemRepo;

use super::items::{find_item, ENTITY};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Move an item to `next`, stamping `stamp` when given.
///
/// Backward moves are allowed but logged.
async fn transition(
    state: &AppState,
    id: DbId,
    next: ItemStatus,
    stamp: Option<TimestampField>,
) -> AppResult<ClothingItem> {
    let current = find_item(state, id).await?;

    if let Ok(from) = ItemStatus::parse(&current.status) {
        if !from.is_forward(next) {
            tracing::warn!(
                item_id = %id,
                from = %from,
                to = %next,
                "Clothing item moved backward in its lifecycle",
            );
        }
    }

    let updated = ClothingItemRepo::update_status(&state.pool, id, next.as_str(), stamp)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))?;

    tracing::info!(
        item_id = %id,
        from = %current.status,
        to = %next,
        stamped = ?stamp,
        "Clothing item status updated",
    );

    Ok(updated)
}

// ---------------------------------------------------------------------------
// POST /items/{id}/clean
// ---------------------------------------------------------------------------

/// Mark an item as cleaned and stamp `date_cleaned`.
pub async fn mark_cleaned(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let next = ItemStatus::Cleaned;
    let item = transition(&state, id, next, next.stamped_field()).await?;
    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// POST /items/{id}/deliver
// ---------------------------------------------------------------------------

/// Mark an item as delivered and stamp `date_delivered`.
pub async fn mark_delivered(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let next = ItemStatus::Delivered;
    let item = transition(&state, id, next, next.stamped_field()).await?;
    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// PUT /items/{id}/status
// ---------------------------------------------------------------------------

/// Set an item's status without touching its dates.
///
/// The value is validated before the item is looked up, so an invalid
/// status never reaches the store.
pub async fn update_item_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItemStatus>,
) -> AppResult<impl IntoResponse> {
    let next = ItemStatus::parse(&input.status)?;
    let item = transition(&state, id, next, None).await?;
    Ok(Json(DataResponse { data: item }))
}
