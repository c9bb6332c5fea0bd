//! Error types for the storefront backend.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps the domain-specific errors raised by the category
//! and store layers, configuration loading, and raw database access during startup.

pub mod category;
pub mod config;
pub mod store;

use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{category::CategoryError, config::ConfigError, store::StoreError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Every variant
/// uses `#[from]` so `?` lifts layer-specific errors into it at the entrypoint.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Category repository or service error.
    #[error(transparent)]
    CategoryErr(#[from] CategoryError),

    /// Store lookup error.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database operation error from SeaORM, raised outside the repositories
    /// (connecting, running migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl AppError {
    /// Converts the error into the serialized shape handed to external callers.
    ///
    /// Domain errors keep their own message. Database and configuration failures are
    /// logged and reduced to a generic message.
    pub fn into_dto(self) -> ErrorDto {
        let error = match self {
            Self::CategoryErr(err) => err.to_string(),
            Self::StoreErr(err) => err.to_string(),
            err => {
                tracing::error!("Internal error: {}", err);
                "Internal server error".to_string()
            }
        };

        ErrorDto { error }
    }
}
