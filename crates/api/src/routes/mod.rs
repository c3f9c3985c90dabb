pub mod clothing_types;
pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                                 list, register, clear
/// /items/pending                         overdue items (?days=N)
/// /items/deadlines                       promised dates with days left
/// /items/export                          export all items
/// /items/import                          replace store with payload
/// /items/{id}                            get
/// /items/{id}/status                     generic status update (PUT)
/// /items/{id}/clean                      mark cleaned (POST)
/// /items/{id}/deliver                    mark delivered (POST)
/// /items/{id}/storage-suggestion         storage location for cleaned item
///
/// /owners/{owner}/items                  items of one owner
///
/// /stats                                 counts and revenue
///
/// /clothing-types                        list, add
/// /clothing-types/reset                  restore defaults (POST)
/// /clothing-types/{id}                   rename, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Clothing item store, lifecycle and bulk transfer.
        .nest("/items", items::router())
        // Owner lookups.
        .nest("/owners", items::owner_router())
        // Shop statistics.
        .route("/stats", get(handlers::stats::get_stats))
        // Clothing type catalog.
        .nest("/clothing-types", clothing_types::router())
}
