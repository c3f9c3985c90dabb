//! Handlers for registering and querying clothing items.
//!
//! Registration parses the form's date strings itself so malformed dates
//! come back as validation errors rather than body rejections.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use pressing_core::clothing_type::validate_line_items;
use pressing_core::dates::parse_optional_timestamp;
use pressing_core::deadline::{self, days_left, pending_cutoff};
use pressing_core::error::CoreError;
use pressing_core::item_status::{self, ItemStatus};
use pressing_core::owner::validate_owner;
use pressing_core::pricing::{validate_amount_given, validate_price};
use pressing_core::types::DbId;
use pressing_db::models::clothing_item::{
    ClothingItem, CreateClothingItem, DeadlineParams, ItemListParams, ItemWithDeadline,
    NewClothingItem, PendingParams,
};
use pressing_db::repositories::ClothingItemRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Entity name used in not-found errors.
pub(crate) const ENTITY: &str = "ClothingItem";

/// Validate every field of an insert record before it reaches the store.
///
/// Imported records are checked for status and date consistency as well.
pub(crate) fn validate_new_item(input: &NewClothingItem) -> Result<(), CoreError> {
    validate_owner(&input.owner)?;
    validate_price(input.price)?;
    validate_amount_given(input.amount_given)?;
    let status = match input.status {
        Some(ref status) => ItemStatus::parse(status)?,
        None => ItemStatus::default(),
    };
    item_status::validate_status_dates(
        status,
        input.date_cleaned.is_some(),
        input.date_delivered.is_some(),
    )?;
    if let Some(ref items) = input.items {
        validate_line_items(items)?;
    }
    Ok(())
}

/// Fetch an item or fail with a not-found error.
pub(crate) async fn find_item(state: &AppState, id: DbId) -> AppResult<ClothingItem> {
    ClothingItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found(ENTITY, id)))
}

/// Blank form fields are stored as null.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// POST /items
// ---------------------------------------------------------------------------

/// Register a newly dropped-off item.
///
/// `date_received` defaults to now. `date_promised` defaults to now plus
/// `DEFAULT_PROMISE_DAYS` when that is configured.
pub async fn register_item(
    State(state): State<AppState>,
    Json(input): Json<CreateClothingItem>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();

    let date_received = parse_optional_timestamp(input.date_received.as_deref())?.unwrap_or(now);
    let date_promised = match parse_optional_timestamp(input.date_promised.as_deref())? {
        Some(promised) => Some(promised),
        None => state
            .config
            .default_promise_days
            .map(|days| deadline::default_promised(now, days)),
    };

    let new_item = NewClothingItem {
        id: None,
        items: input.items,
        description: non_blank(input.description),
        owner: input.owner,
        price: input.price,
        status: Some(ItemStatus::Received.as_str().to_string()),
        date_received: Some(date_received),
        date_cleaned: None,
        date_delivered: None,
        date_promised,
        notes: non_blank(input.notes),
        contact: non_blank(input.contact),
        image: non_blank(input.image),
        amount_given: input.amount_given,
    };
    validate_new_item(&new_item)?;

    let item = ClothingItemRepo::create(&state.pool, &new_item).await?;

    tracing::info!(
        item_id = %item.id,
        owner = %item.owner,
        price = item.price,
        "Clothing item registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

// ---------------------------------------------------------------------------
// GET /items/{id}
// ---------------------------------------------------------------------------

/// Get a single item by its code.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// GET /items
// ---------------------------------------------------------------------------

/// List items, optionally filtered by status and owner, newest first.
///
/// A blank owner is treated as no owner filter.
pub async fn list_items(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        item_status::validate_status(s)?;
    }

    let owner = params.owner.as_deref().filter(|o| !o.trim().is_empty());
    let items =
        ClothingItemRepo::list_filtered(&state.pool, params.status.as_deref(), owner).await?;

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /owners/{owner}/items
// ---------------------------------------------------------------------------

/// All items of one owner; the name is matched case-insensitively.
pub async fn list_owner_items(
    State(state): State<AppState>,
    Path(owner): Path<String>,
) -> AppResult<impl IntoResponse> {
    let items = ClothingItemRepo::list_by_owner(&state.pool, &owner).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /items/pending?days=N
// ---------------------------------------------------------------------------

/// Items not yet cleaned that were received more than `days` days ago.
pub async fn list_pending_items(
    State(state): State<AppState>,
    Query(params): Query<PendingParams>,
) -> AppResult<impl IntoResponse> {
    deadline::validate_days(params.days)?;

    let cutoff = pending_cutoff(Utc::now(), params.days);
    let items = ClothingItemRepo::list_pending_older_than(&state.pool, cutoff).await?;

    tracing::debug!(days = params.days, count = items.len(), "Pending items listed");

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /items/deadlines
// ---------------------------------------------------------------------------

/// Items with a promised date, earliest first, each with whole days left.
pub async fn list_deadlines(
    State(state): State<AppState>,
    Query(params): Query<DeadlineParams>,
) -> AppResult<impl IntoResponse> {
    let owner = params.owner.as_deref().filter(|o| !o.trim().is_empty());
    let items = ClothingItemRepo::list_with_deadlines(&state.pool, owner).await?;

    let now = Utc::now();
    let entries: Vec<ItemWithDeadline> = items
        .into_iter()
        .filter_map(|item| {
            let left = days_left(item.date_promised?, now);
            Some(ItemWithDeadline {
                item,
                days_left: left,
            })
        })
        .collect();

    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// GET /items/{id}/storage-suggestion
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct StorageSuggestionResponse {
    pub id: DbId,
    pub suggestion: String,
}

/// Suggest where to store a cleaned item, based on its description.
pub async fn suggest_storage(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = find_item(&state, id).await?;
    let status = ItemStatus::parse(&item.status)?;

    let suggestion = state
        .suggester
        .suggest_for(status, item.description.as_deref())?;

    Ok(Json(DataResponse {
        data: StorageSuggestionResponse { id, suggestion },
    }))
}
