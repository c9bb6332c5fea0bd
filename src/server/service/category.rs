use crate::server::{
    data::category::CategoryRepository,
    error::category::CategoryError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

/// Application service for categories.
///
/// Titles are trimmed and must be non-empty. A title already held by another category
/// is rejected with `TitleTaken` before any write reaches the repository.
pub struct CategoryService<R: CategoryRepository> {
    category_repository: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(category_repository: R) -> Self {
        Self {
            category_repository,
        }
    }

    /// Creates a new category.
    ///
    /// # Arguments
    /// - `params` - Title of the new category; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// - `Ok(Category)` - The created category
    /// - `Err(CategoryError::InvalidTitle)` - Title is blank
    /// - `Err(CategoryError::TitleTaken)` - Another category already has this title
    /// - `Err(CategoryError)` - Repository failure
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        let title = normalize_title(&params.title)?;

        if self
            .category_repository
            .get_category_by_title(title.clone())
            .await?
            .is_some()
        {
            tracing::warn!("Rejected category create: title '{}' is taken", title);
            return Err(CategoryError::TitleTaken(title));
        }

        let category = self
            .category_repository
            .create_category(CreateCategoryParams { title })
            .await?;

        tracing::info!("Created category {} '{}'", category.id, category.title);

        Ok(category)
    }

    /// Updates a category's title.
    ///
    /// Keeping a category's current title is allowed; taking the title of a different
    /// category is not. An update without a title is passed through unchanged.
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        let title = match params.title {
            Some(ref title) => {
                let title = normalize_title(title)?;

                let existing = self
                    .category_repository
                    .get_category_by_title(title.clone())
                    .await?;
                if existing.is_some_and(|category| category.id != params.id) {
                    tracing::warn!(
                        "Rejected update of category {}: title '{}' is taken",
                        params.id,
                        title
                    );
                    return Err(CategoryError::TitleTaken(title));
                }

                Some(title)
            }
            None => None,
        };

        let category = self
            .category_repository
            .update_category(UpdateCategoryParams {
                id: params.id,
                title,
            })
            .await?;

        tracing::info!("Updated category {} '{}'", category.id, category.title);

        Ok(category)
    }

    /// Deletes a category, returning it as it was before deletion.
    pub async fn delete(&self, id: i32) -> Result<Category, CategoryError> {
        let category = self.category_repository.delete_category(id).await?;

        tracing::info!("Deleted category {} '{}'", category.id, category.title);

        Ok(category)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, CategoryError> {
        self.category_repository.get_category_by_id(id).await
    }

    pub async fn get_by_title(&self, title: &str) -> Result<Option<Category>, CategoryError> {
        self.category_repository
            .get_category_by_title(title.to_string())
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, CategoryError> {
        self.category_repository.get_all_categories().await
    }
}

fn normalize_title(title: &str) -> Result<String, CategoryError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        tracing::warn!("Rejected blank category title");
        return Err(CategoryError::InvalidTitle);
    }

    Ok(trimmed.to_string())
}
