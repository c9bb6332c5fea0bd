use sea_orm::DbErr;
use thiserror::Error;

/// Cause of a failed store lookup.
///
/// Callers receive a single `StoreError::NotExist` regardless of cause; the tag keeps
/// what actually went wrong available for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreLookupFailure {
    /// The store row does not exist.
    NotFound,
    /// The database could not be reached.
    Unavailable,
    /// Any other database failure.
    Unknown,
}

impl StoreLookupFailure {
    /// Classifies a database error by the kind of failure it represents.
    pub fn classify(err: &DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) => Self::NotFound,
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable,
            _ => Self::Unknown,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be loaded.
    #[error("Store {store_id} does not exist")]
    NotExist {
        /// The id that was looked up
        store_id: i32,
        /// What kind of failure the lookup ran into
        failure: StoreLookupFailure,
        /// The underlying repository error
        #[source]
        source: DbErr,
    },
}
