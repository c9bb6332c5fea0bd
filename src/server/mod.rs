//! Server-side business logic and data access.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Application logic over the repository contracts
//! - **Data Layer** (`data/`) - Repository contracts and their SeaORM-backed data sources
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection and migrations

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
