//! Factory methods for creating test data.
//!
//! This module provides factory methods that insert test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create with custom values
//!     let store = factory::store::StoreFactory::new(&db)
//!         .name("Downtown")
//!         .address(None)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod helpers;
pub mod store;

// Re-export commonly used factory functions for concise usage
pub use category::{create_categories, create_category};
pub use store::create_store;
