//! Repository for the `clothing_items` table.
//!
//! Every method is a single statement against the pool. Owner arguments are
//! normalized here so callers can pass raw user input.

use chrono::Utc;
use pressing_core::item_status::{
    TimestampField, STATUS_CLEANED, STATUS_DELIVERED, STATUS_RECEIVED,
};
use pressing_core::owner::normalize_owner;
use pressing_core::types::{DbId, Timestamp};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::clothing_item::{ClothingItem, ItemStats, NewClothingItem};

/// Column list for `clothing_items` queries.
const COLUMNS: &str = "\
    id, items, description, owner, price, status, \
    date_received, date_cleaned, date_delivered, date_promised, \
    notes, contact, image, amount_given";

/// Provides store and query operations for clothing items.
pub struct ClothingItemRepo;

impl ClothingItemRepo {
    /// Insert an item, returning the full row.
    ///
    /// A missing id gets a fresh v4 UUID, a missing status becomes
    /// `received` and a missing `date_received` becomes now. The owner is
    /// stored upper-cased.
    pub async fn create(
        pool: &PgPool,
        input: &NewClothingItem,
    ) -> Result<ClothingItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO clothing_items \
                (id, items, description, owner, price, status, \
                 date_received, date_cleaned, date_delivered, date_promised, \
                 notes, contact, image, amount_given) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(&input.items)
            .bind(&input.description)
            .bind(normalize_owner(&input.owner))
            .bind(input.price)
            .bind(input.status.as_deref().unwrap_or(STATUS_RECEIVED))
            .bind(input.date_received.unwrap_or_else(Utc::now))
            .bind(input.date_cleaned)
            .bind(input.date_delivered)
            .bind(input.date_promised)
            .bind(&input.notes)
            .bind(&input.contact)
            .bind(&input.image)
            .bind(input.amount_given)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clothing_items WHERE id = $1");
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every item in the store, in no particular order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clothing_items");
        sqlx::query_as::<_, ClothingItem>(&query).fetch_all(pool).await
    }

    /// All items belonging to an owner, compared in upper-cased form.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner: &str,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clothing_items WHERE owner = $1");
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(normalize_owner(owner))
            .fetch_all(pool)
            .await
    }

    /// Items not in `cleaned` status that were received before `cutoff`.
    ///
    /// Delivered items older than the cutoff are included too.
    pub async fn list_pending_older_than(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clothing_items \
             WHERE status <> $1 AND date_received < $2"
        );
        sqlx::query_as::<_, ClothingItem>(&query)
            .bind(STATUS_CLEANED)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Items with a promised date, optionally for one owner, earliest
    /// deadline first.
    pub async fn list_with_deadlines(
        pool: &PgPool,
        owner: Option<&str>,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let owner_clause = if owner.is_some() { "AND owner = $1" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM clothing_items \
             WHERE date_promised IS NOT NULL {owner_clause} \
             ORDER BY date_promised ASC"
        );

        let mut q = sqlx::query_as::<_, ClothingItem>(&query);
        if let Some(o) = owner {
            q = q.bind(normalize_owner(o));
        }
        q.fetch_all(pool).await
    }

    /// List items with optional filters for status and owner.
    ///
    /// Results are ordered newest-received first; rows without a
    /// `date_received` sort last.
    pub async fn list_filtered(
        pool: &PgPool,
        status: Option<&str>,
        owner: Option<&str>,
    ) -> Result<Vec<ClothingItem>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if owner.is_some() {
            conditions.push(format!("owner = ${param_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM clothing_items {where_clause} \
             ORDER BY date_received DESC NULLS LAST"
        );

        let mut q = sqlx::query_as::<_, ClothingItem>(&query);

        if let Some(s) = status {
            q = q.bind(s);
        }
        if let Some(o) = owner {
            q = q.bind(normalize_owner(o));
        }

        q.fetch_all(pool).await
    }

    /// Set the status of an item, optionally stamping one date column with
    /// the current time. Returns the updated row if found.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
        stamp: Option<TimestampField>,
    ) -> Result<Option<ClothingItem>, sqlx::Error> {
        match stamp {
            Some(field) => {
                let query = format!(
                    "UPDATE clothing_items SET status = $1, {} = $2 \
                     WHERE id = $3 RETURNING {COLUMNS}",
                    field.column()
                );
                sqlx::query_as::<_, ClothingItem>(&query)
                    .bind(new_status)
                    .bind(Utc::now())
                    .bind(id)
                    .fetch_optional(pool)
                    .await
            }
            None => {
                let query = format!(
                    "UPDATE clothing_items SET status = $1 WHERE id = $2 RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, ClothingItem>(&query)
                    .bind(new_status)
                    .bind(id)
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    /// Aggregate counters and revenue over the whole store.
    ///
    /// `pending_items` counts `received` items only. Revenue sums the price
    /// of delivered items, skipping null and zero prices.
    pub async fn stats(pool: &PgPool) -> Result<ItemStats, sqlx::Error> {
        sqlx::query_as::<_, ItemStats>(
            "SELECT \
                COUNT(*) AS total_items, \
                COUNT(*) FILTER (WHERE status = $1) AS cleaned_items, \
                COUNT(*) FILTER (WHERE status = $2) AS delivered_items, \
                COUNT(*) FILTER (WHERE status = $3) AS pending_items, \
                COALESCE(SUM(price) FILTER ( \
                    WHERE status = $2 AND price IS NOT NULL AND price <> 0 \
                ), 0)::float8 AS total_revenue \
             FROM clothing_items",
        )
        .bind(STATUS_CLEANED)
        .bind(STATUS_DELIVERED)
        .bind(STATUS_RECEIVED)
        .fetch_one(pool)
        .await
    }

    /// Delete every item. Returns the number of rows removed.
    pub async fn clear_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clothing_items").execute(pool).await?;
        tracing::debug!(removed = result.rows_affected(), "Cleared clothing items");
        Ok(result.rows_affected())
    }
}
