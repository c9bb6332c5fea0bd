//! Business logic layer.
//!
//! Services sit between callers and the repository layer. Each service owns a repository
//! behind its trait contract, applies application-level checks, and converts repository
//! failures into the errors callers are expected to handle.

pub mod category;
pub mod store;
