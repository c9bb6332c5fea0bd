use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised by the category repository and service.
///
/// Write failures keep the database error as their `source` but show the caller only a
/// generic, operation-named message. Listing all categories is the one operation that
/// hands back the database error unchanged, through the transparent `Database` variant.
#[derive(Error, Debug)]
pub enum CategoryError {
    /// Inserting a category was rejected, e.g. by the unique constraint on `title`.
    #[error("Create category failed")]
    CreateFailed(#[source] DbErr),

    /// Updating a category was rejected, or the target row does not exist.
    #[error("Update category failed")]
    UpdateFailed(#[source] DbErr),

    /// Deleting a category failed, or the target row does not exist.
    #[error("Delete category failed")]
    DeleteFailed(#[source] DbErr),

    /// No category exists with the requested id.
    #[error("Category {0} does not exist")]
    NotFound(i32),

    /// Lookup failed for a reason other than the row being absent.
    #[error("Unexpected error")]
    Unexpected(#[source] DbErr),

    /// The underlying database error, passed through unchanged.
    #[error(transparent)]
    Database(DbErr),

    /// Title is empty after trimming whitespace.
    #[error("Category title must not be empty")]
    InvalidTitle,

    /// Another category already uses this title.
    #[error("Category with title '{0}' already exists")]
    TitleTaken(String),
}
