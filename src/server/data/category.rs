//! Category data source.
//!
//! Adapts the SeaORM `category` entity to the `CategoryRepository` contract. Every failure is
//! logged with the operation that raised it before being converted into a `CategoryError`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::server::{
    error::category::CategoryError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

/// Repository contract for categories used by the application layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persists a new category and returns it with its assigned id.
    async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<Category, CategoryError>;

    /// Updates the title of an existing category.
    async fn update_category(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Category, CategoryError>;

    /// Removes a category, returning it as it was before deletion.
    async fn delete_category(&self, id: i32) -> Result<Category, CategoryError>;

    /// Gets a category by id; an absent row is an error.
    async fn get_category_by_id(&self, id: i32) -> Result<Category, CategoryError>;

    /// Gets a category by exact title; an absent row is `Ok(None)`.
    async fn get_category_by_title(&self, title: String)
        -> Result<Option<Category>, CategoryError>;

    /// Gets every category in the database's natural order.
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryError>;
}

/// SeaORM-backed implementation of `CategoryRepository`.
pub struct CategoryDataSource<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryDataSource<'a> {
    /// Creates a new CategoryDataSource instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads and deletes the row inside one transaction so the returned model is exactly
    /// what was removed.
    async fn delete_returning(&self, id: i32) -> Result<entity::category::Model, DbErr> {
        let txn = self.db.begin().await?;

        let existing = entity::prelude::Category::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Category with id {} not found",
                id
            )))?;

        entity::prelude::Category::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(existing)
    }
}

#[async_trait]
impl<'a> CategoryRepository for CategoryDataSource<'a> {
    /// Inserts a category with the given title.
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category with its storage-assigned id
    /// - `Err(CategoryError::CreateFailed)` - Insert rejected (e.g. duplicate title)
    async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<Category, CategoryError> {
        entity::category::ActiveModel {
            title: ActiveValue::Set(params.title),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map(Category::from_entity)
        .map_err(|e| {
            tracing::error!("[CategoryDataSource] Error on create category: {}", e);
            CategoryError::CreateFailed(e)
        })
    }

    /// Sets the title of the category identified by `params.id`.
    ///
    /// When `params.title` is `None` nothing is written and the current row is returned,
    /// which still fails if the row does not exist.
    ///
    /// # Returns
    /// - `Ok(Category)` - The category after the update
    /// - `Err(CategoryError::UpdateFailed)` - Row missing or write rejected
    async fn update_category(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Category, CategoryError> {
        let result = match params.title {
            Some(title) => {
                entity::category::ActiveModel {
                    id: ActiveValue::Unchanged(params.id),
                    title: ActiveValue::Set(title),
                }
                .update(self.db)
                .await
            }
            None => entity::prelude::Category::find_by_id(params.id)
                .one(self.db)
                .await
                .and_then(|found| {
                    found.ok_or(DbErr::RecordNotFound(format!(
                        "Category with id {} not found",
                        params.id
                    )))
                }),
        };

        result.map(Category::from_entity).map_err(|e| {
            tracing::error!("[CategoryDataSource] Error on update category: {}", e);
            CategoryError::UpdateFailed(e)
        })
    }

    /// Deletes the category with the given id.
    ///
    /// # Returns
    /// - `Ok(Category)` - The category as it existed immediately before deletion
    /// - `Err(CategoryError::DeleteFailed)` - Row missing or delete rejected
    async fn delete_category(&self, id: i32) -> Result<Category, CategoryError> {
        self.delete_returning(id)
            .await
            .map(Category::from_entity)
            .map_err(|e| {
                tracing::error!("[CategoryDataSource] Error on delete category: {}", e);
                CategoryError::DeleteFailed(e)
            })
    }

    async fn get_category_by_id(&self, id: i32) -> Result<Category, CategoryError> {
        match entity::prelude::Category::find_by_id(id).one(self.db).await {
            Ok(Some(entity)) => Ok(Category::from_entity(entity)),
            Ok(None) => {
                tracing::error!(
                    "[CategoryDataSource] Error on get_category_by_id: category {} not found",
                    id
                );
                Err(CategoryError::NotFound(id))
            }
            Err(e) => {
                tracing::error!("[CategoryDataSource] Error on get_category_by_id: {}", e);
                Err(CategoryError::Unexpected(e))
            }
        }
    }

    async fn get_category_by_title(
        &self,
        title: String,
    ) -> Result<Option<Category>, CategoryError> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Title.eq(title))
            .one(self.db)
            .await
            .map(|found| found.map(Category::from_entity))
            .map_err(|e| {
                tracing::error!("[CategoryDataSource] Error on get_category_by_title: {}", e);
                CategoryError::Unexpected(e)
            })
    }

    /// Lists every category.
    ///
    /// # Returns
    /// - `Ok(Vec<Category>)` - All categories, in the order the database returns them
    /// - `Err(CategoryError::Database)` - The database error, unchanged
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryError> {
        let categories = entity::prelude::Category::find()
            .all(self.db)
            .await
            .map_err(|e| {
                tracing::error!("[CategoryDataSource] Error on get_all_categories: {}", e);
                CategoryError::Database(e)
            })?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }
}
