//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and updates
//! - Query parameter structs for list endpoints

pub mod clothing_item;
pub mod clothing_type;
