//! Category factory for creating test category rows.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test categories with customizable fields.
///
/// The default title is unique per factory instance so several categories can be
/// inserted without tripping the unique constraint on `title`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::category::CategoryFactory;
///
/// let category = CategoryFactory::new(&db)
///     .title("Electronics")
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CategoryFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::category::entity_builder()
            .title(format!("Category {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the category title.
    ///
    /// # Arguments
    /// - `title` - Unique display title for the category
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// The id is left for the database to assign.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with a unique default title.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates `count` categories with unique default titles, in insertion order.
pub async fn create_categories(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::category::Model>, DbErr> {
    let mut categories = Vec::with_capacity(count);
    for _ in 0..count {
        categories.push(create_category(db).await?);
    }

    Ok(categories)
}
