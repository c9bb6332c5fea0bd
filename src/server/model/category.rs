//! Category domain models and parameters.
//!
//! Provides the domain model for product categories along with the parameter types used
//! to create and update them. Categories are identified by a storage-assigned id and carry
//! a title that is unique across all categories.

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

/// Product category as seen by the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Display title, unique across categories.
    pub title: String,
}

impl Category {
    /// Converts the category domain model to a DTO for external callers.
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            title: self.title,
        }
    }

    /// Converts an entity model to a category domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Category` - The converted category domain model
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
        }
    }
}

/// Parameters for creating a new category.
///
/// The id is assigned by storage on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryParams {
    /// Title of the new category.
    pub title: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self { title: dto.title }
    }
}

/// Parameters for a partial category update.
///
/// Only `title` is mutable. A `None` title leaves the stored row untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryParams {
    /// Id of the category to update.
    pub id: i32,
    /// New title, if it should change.
    pub title: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            title: dto.title,
        }
    }
}
