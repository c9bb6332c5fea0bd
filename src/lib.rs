//! Category and store data access for a layered e-commerce backend.

pub mod model;
pub mod server;
