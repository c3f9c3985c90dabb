//! Clothing type catalog model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clothing_types` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct ClothingType {
    pub id: String,
    pub name: String,
}

/// DTO for adding a type. The id is derived from the name.
#[derive(Debug, Deserialize)]
pub struct CreateClothingType {
    pub name: String,
}

/// DTO for renaming a type. The id is kept.
#[derive(Debug, Deserialize)]
pub struct RenameClothingType {
    pub name: String,
}
