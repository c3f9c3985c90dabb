//! Handler for the shop statistics page.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use pressing_db::repositories::ClothingItemRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /stats -- item counts per status and delivered revenue.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = ClothingItemRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
