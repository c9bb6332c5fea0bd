//! Serializable DTOs shared with callers outside the crate.

pub mod api;
pub mod category;
pub mod store;
