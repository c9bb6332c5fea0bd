//! Store fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating store entity models without database insertion.
//! These are useful for mocking repository responses in service tests.

use entity::store;

/// Default test store name.
pub const DEFAULT_NAME: &str = "Test Store";

/// Default test store address.
pub const DEFAULT_ADDRESS: Option<&str> = Some("1 Market Street");

/// Creates a store entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Store"`
/// - address: `Some("1 Market Street")`
///
/// # Returns
/// - `store::Model` - In-memory store entity
pub fn entity() -> store::Model {
    entity_builder().build()
}

/// Creates a store entity builder for customization.
///
/// # Returns
/// - `StoreEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> StoreEntityBuilder {
    StoreEntityBuilder::default()
}

/// Builder for creating customized store entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct StoreEntityBuilder {
    id: i32,
    name: String,
    address: Option<String>,
}

impl Default for StoreEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            address: DEFAULT_ADDRESS.map(str::to_string),
        }
    }
}

impl StoreEntityBuilder {
    /// Sets the store ID.
    ///
    /// # Arguments
    /// - `id` - Store ID
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the store name.
    ///
    /// # Arguments
    /// - `name` - Display name for the store
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the store address.
    ///
    /// # Arguments
    /// - `address` - Street address, or `None` for stores without one
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn address(mut self, address: Option<&str>) -> Self {
        self.address = address.map(str::to_string);
        self
    }

    /// Builds and returns the store entity model.
    pub fn build(self) -> store::Model {
        store::Model {
            id: self.id,
            name: self.name,
            address: self.address,
        }
    }
}
