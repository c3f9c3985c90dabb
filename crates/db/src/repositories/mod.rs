//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod clothing_item_repo;
pub mod clothing_type_repo;

pub use clothing_item_repo::ClothingItemRepo;
pub use clothing_type_repo::ClothingTypeRepo;
