//! Handlers for the clothing type catalog.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pressing_core::clothing_type::{slugify, validate_type_name};
use pressing_core::error::CoreError;
use pressing_db::models::clothing_type::{CreateClothingType, RenameClothingType};
use pressing_db::repositories::ClothingTypeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Entity name used in not-found errors.
const ENTITY: &str = "ClothingType";

/// GET /clothing-types
pub async fn list_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = ClothingTypeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: types }))
}

/// POST /clothing-types
///
/// The id is the slug of the name. Adding a name whose slug already exists
/// returns the existing type unchanged.
pub async fn add_type(
    State(state): State<AppState>,
    Json(input): Json<CreateClothingType>,
) -> AppResult<impl IntoResponse> {
    validate_type_name(&input.name)?;
    let name = input.name.trim();
    let id = slugify(name);

    let clothing_type = ClothingTypeRepo::add(&state.pool, &id, name).await?;

    tracing::info!(type_id = %clothing_type.id, "Clothing type added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: clothing_type })))
}

/// PUT /clothing-types/{id}
pub async fn rename_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<RenameClothingType>,
) -> AppResult<impl IntoResponse> {
    validate_type_name(&input.name)?;

    let clothing_type = ClothingTypeRepo::rename(&state.pool, &id, input.name.trim())
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, &id)))?;

    Ok(Json(DataResponse { data: clothing_type }))
}

/// DELETE /clothing-types/{id}
pub async fn delete_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !ClothingTypeRepo::delete(&state.pool, &id).await? {
        return Err(AppError::Core(CoreError::not_found(ENTITY, &id)));
    }

    tracing::info!(type_id = %id, "Clothing type deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /clothing-types/reset -- restore the default catalog.
pub async fn reset_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let types = ClothingTypeRepo::reset(&state.pool).await?;

    tracing::info!(count = types.len(), "Clothing types reset to defaults");

    Ok(Json(DataResponse { data: types }))
}
