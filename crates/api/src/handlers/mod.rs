//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the
//! shop. Handlers validate through `pressing_core`, delegate to the
//! repositories in `pressing_db` and map errors via [`crate::error::AppError`].

pub mod clothing_types;
pub mod items;
pub mod lifecycle;
pub mod stats;
pub mod transfer;
