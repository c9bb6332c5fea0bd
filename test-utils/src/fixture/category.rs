//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category title.
pub const DEFAULT_TITLE: &str = "Test Category";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Test Category"`
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        title: DEFAULT_TITLE.to_string(),
    }
}

/// Creates a category entity builder for customization.
///
/// ```rust,ignore
/// let category = fixture::category::entity_builder()
///     .id(7)
///     .title("Electronics")
///     .build();
/// ```
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    title: String,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            title: self.title,
        }
    }
}
