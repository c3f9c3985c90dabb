//! Clothing item entity model and DTOs.

use pressing_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clothing_items` table.
///
/// Serializes flat with every column present; absent optionals are `null`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ClothingItem {
    pub id: DbId,
    pub items: Option<serde_json::Value>,
    pub description: Option<String>,
    pub owner: String,
    pub price: f64,
    pub status: String,
    pub date_received: Timestamp,
    pub date_cleaned: Option<Timestamp>,
    pub date_delivered: Option<Timestamp>,
    pub date_promised: Option<Timestamp>,
    pub notes: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
    pub amount_given: Option<f64>,
}

/// Fully-typed insert record.
///
/// Used directly by import (it deserializes an exported item) and built by
/// the registration handler. `id`, `status` and `date_received` fall back to
/// a fresh UUID, `received` and now when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewClothingItem {
    pub id: Option<DbId>,
    pub items: Option<serde_json::Value>,
    pub description: Option<String>,
    pub owner: String,
    #[serde(default)]
    pub price: f64,
    pub status: Option<String>,
    pub date_received: Option<Timestamp>,
    pub date_cleaned: Option<Timestamp>,
    pub date_delivered: Option<Timestamp>,
    pub date_promised: Option<Timestamp>,
    pub notes: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
    pub amount_given: Option<f64>,
}

/// Registration form body.
///
/// Dates arrive as ISO-8601 text and are parsed by the handler so a
/// malformed value is reported as a validation error.
#[derive(Debug, Deserialize)]
pub struct CreateClothingItem {
    pub items: Option<serde_json::Value>,
    pub description: Option<String>,
    pub owner: String,
    pub price: f64,
    pub date_received: Option<String>,
    pub date_promised: Option<String>,
    pub notes: Option<String>,
    pub contact: Option<String>,
    pub image: Option<String>,
    pub amount_given: Option<f64>,
}

/// DTO for the generic status update.
#[derive(Debug, Deserialize)]
pub struct UpdateItemStatus {
    pub status: String,
}

/// Query parameters for listing items.
#[derive(Debug, Default, Deserialize)]
pub struct ItemListParams {
    pub status: Option<String>,
    pub owner: Option<String>,
}

/// Query parameters for the overdue listing.
#[derive(Debug, Deserialize)]
pub struct PendingParams {
    pub days: i64,
}

/// Query parameters for the deadline listing.
#[derive(Debug, Default, Deserialize)]
pub struct DeadlineParams {
    pub owner: Option<String>,
}

/// An item with a promised date and the whole days remaining until it.
#[derive(Debug, Clone, Serialize)]
pub struct ItemWithDeadline {
    #[serde(flatten)]
    pub item: ClothingItem,
    pub days_left: i64,
}

/// Aggregate counters over the whole store.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ItemStats {
    pub total_items: i64,
    pub cleaned_items: i64,
    pub delivered_items: i64,
    pub pending_items: i64,
    pub total_revenue: f64,
}
