use crate::server::{
    data::store::StoreRepository,
    error::store::{StoreError, StoreLookupFailure},
    model::store::Store,
};

/// Application facade over the store repository.
pub struct StoreService<R: StoreRepository> {
    store_repository: R,
}

impl<R: StoreRepository> StoreService<R> {
    pub fn new(store_repository: R) -> Self {
        Self { store_repository }
    }

    /// Gets a store by ID.
    ///
    /// Every repository failure is reported as `StoreError::NotExist`, whether the store is
    /// missing or the database could not be queried. The error carries the classified cause
    /// and the original database error as its source.
    ///
    /// # Arguments
    /// - `store_id` - ID of the store to load
    ///
    /// # Returns
    /// - `Ok(Store)` - The store
    /// - `Err(StoreError::NotExist)` - The store could not be loaded for any reason
    pub async fn get_store_by_id(&self, store_id: i32) -> Result<Store, StoreError> {
        self.store_repository
            .get_store_by_id(store_id)
            .await
            .map_err(|source| {
                let failure = StoreLookupFailure::classify(&source);

                tracing::error!(
                    "[StoreService] Error on get_store_by_id {} ({:?}): {}",
                    store_id,
                    failure,
                    source
                );

                StoreError::NotExist {
                    store_id,
                    failure,
                    source,
                }
            })
    }
}
