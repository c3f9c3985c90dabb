//! Route definitions for clothing items.
//!
//! Two routers are provided:
//! - `router()` for item routes mounted at `/items`
//! - `owner_router()` for owner-scoped routes mounted at `/owners`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{items, lifecycle, transfer};
use crate::state::AppState;

/// Item routes mounted at `/items`.
///
/// ```text
/// GET    /                          -> list_items (?status, ?owner)
/// POST   /                          -> register_item
/// DELETE /                          -> clear_items
/// GET    /pending                   -> list_pending_items (?days)
/// GET    /deadlines                 -> list_deadlines (?owner)
/// GET    /export                    -> export_items
/// POST   /import                    -> import_items
/// GET    /{id}                      -> get_item
/// PUT    /{id}/status               -> update_item_status
/// POST   /{id}/clean                -> mark_cleaned
/// POST   /{id}/deliver              -> mark_delivered
/// GET    /{id}/storage-suggestion   -> suggest_storage
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(items::list_items)
                .post(items::register_item)
                .delete(transfer::clear_items),
        )
        .route("/pending", get(items::list_pending_items))
        .route("/deadlines", get(items::list_deadlines))
        .route("/export", get(transfer::export_items))
        .route("/import", post(transfer::import_items))
        .route("/{id}", get(items::get_item))
        .route("/{id}/status", put(lifecycle::update_item_status))
        .route("/{id}/clean", post(lifecycle::mark_cleaned))
        .route("/{id}/deliver", post(lifecycle::mark_delivered))
        .route("/{id}/storage-suggestion", get(items::suggest_storage))
}

/// Owner-scoped routes mounted at `/owners`.
///
/// ```text
/// GET    /{owner}/items             -> list_owner_items
/// ```
pub fn owner_router() -> Router<AppState> {
    Router::new().route("/{owner}/items", get(items::list_owner_items))
}
