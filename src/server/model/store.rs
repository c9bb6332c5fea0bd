//! Store domain model.

use crate::model::store::StoreDto;

/// A physical or online store, identified by its storage id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl Store {
    /// Converts the store domain model to a DTO for external callers.
    pub fn into_dto(self) -> StoreDto {
        StoreDto {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }

    /// Converts an entity model to a store domain model at the repository boundary.
    pub fn from_entity(entity: entity::store::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            address: entity.address,
        }
    }
}
