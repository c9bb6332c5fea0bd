//! Store factory for creating test store rows.
//!
//! This module provides factory methods for creating store entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stores with customizable fields.
///
/// Default values are sourced from the store fixture, with a unique name per
/// factory instance.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::store::StoreFactory;
///
/// let store = StoreFactory::new(&db)
///     .name("Downtown")
///     .build()
///     .await?;
/// ```
pub struct StoreFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::store::Model,
}

impl<'a> StoreFactory<'a> {
    /// Creates a new StoreFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StoreFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::store::entity_builder()
            .name(format!("Store {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the store name.
    ///
    /// # Arguments
    /// - `name` - Display name for the store
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the store address.
    ///
    /// # Arguments
    /// - `address` - Street address, or `None`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn address(mut self, address: Option<&str>) -> Self {
        self.entity.address = address.map(str::to_string);
        self
    }

    /// Builds and inserts the store entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::store::Model)` - Created store entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::store::Model, DbErr> {
        entity::store::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            address: ActiveValue::Set(self.entity.address),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a store with default values.
///
/// Shorthand for `StoreFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::store::Model)` - Created store entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_store(db: &DatabaseConnection) -> Result<entity::store::Model, DbErr> {
    StoreFactory::new(db).build().await
}
