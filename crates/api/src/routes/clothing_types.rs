//! Route definitions for the clothing type catalog, mounted at
//! `/clothing-types`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::clothing_types;
use crate::state::AppState;

/// ```text
/// GET    /           -> list_types
/// POST   /           -> add_type
/// POST   /reset      -> reset_types
/// PUT    /{id}       -> rename_type
/// DELETE /{id}       -> delete_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(clothing_types::list_types).post(clothing_types::add_type),
        )
        .route("/reset", post(clothing_types::reset_types))
        .route(
            "/{id}",
            put(clothing_types::rename_type).delete(clothing_types::delete_type),
        )
}
