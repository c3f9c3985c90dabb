//! Domain logic for the pressing shop backend.
//!
//! Everything here is pure: no database or network access. The `db` and
//! `api` crates call into these modules for validation, status rules,
//! date arithmetic and storage suggestions.

pub mod clothing_type;
pub mod dates;
pub mod deadline;
pub mod error;
pub mod item_status;
pub mod owner;
pub mod pricing;
pub mod storage_suggestion;
pub mod transfer;
pub mod types;
