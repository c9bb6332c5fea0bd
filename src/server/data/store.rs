//! Store data source.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::store::Store;

/// Repository contract for stores.
///
/// Lookups fail with `DbErr::RecordNotFound` when the store is absent rather than
/// returning an empty result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_store_by_id(&self, store_id: i32) -> Result<Store, DbErr>;
}

/// SeaORM-backed implementation of `StoreRepository`.
pub struct StoreDataSource<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreDataSource<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> StoreRepository for StoreDataSource<'a> {
    async fn get_store_by_id(&self, store_id: i32) -> Result<Store, DbErr> {
        let entity = entity::prelude::Store::find_by_id(store_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Store with id {} not found",
                store_id
            )))?;

        Ok(Store::from_entity(entity))
    }
}
