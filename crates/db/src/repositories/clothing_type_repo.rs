//! Repository for the `clothing_types` table.

use pressing_core::clothing_type::DEFAULT_TYPES;
use sqlx::PgPool;

use crate::models::clothing_type::ClothingType;

/// Provides CRUD operations for the clothing type catalog.
pub struct ClothingTypeRepo;

impl ClothingTypeRepo {
    /// All types, alphabetical by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<ClothingType>, sqlx::Error> {
        sqlx::query_as::<_, ClothingType>("SELECT id, name FROM clothing_types ORDER BY name")
            .fetch_all(pool)
            .await
    }

    /// Insert a type unless its id already exists.
    ///
    /// Returns the stored row either way: the new one, or the existing one
    /// left untouched.
    pub async fn add(pool: &PgPool, id: &str, name: &str) -> Result<ClothingType, sqlx::Error> {
        sqlx::query(
            "INSERT INTO clothing_types (id, name) VALUES ($1, $2) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;

        sqlx::query_as::<_, ClothingType>("SELECT id, name FROM clothing_types WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Change a type's display name. Returns `None` if the id is unknown.
    pub async fn rename(
        pool: &PgPool,
        id: &str,
        name: &str,
    ) -> Result<Option<ClothingType>, sqlx::Error> {
        sqlx::query_as::<_, ClothingType>(
            "UPDATE clothing_types SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a type. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clothing_types WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the catalog with the default types.
    pub async fn reset(pool: &PgPool) -> Result<Vec<ClothingType>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM clothing_types")
            .execute(&mut *tx)
            .await?;

        for (id, name) in DEFAULT_TYPES {
            sqlx::query("INSERT INTO clothing_types (id, name) VALUES ($1, $2)")
                .bind(*id)
                .bind(*name)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Self::list(pool).await
    }
}
