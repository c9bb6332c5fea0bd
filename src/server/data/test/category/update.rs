use super::*;

/// Tests updating a category's title.
///
/// Verifies that the new title is persisted and the id is unchanged.
///
/// Expected: Ok(Category) with the new title
#[tokio::test]
async fn updates_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_category(db).await?;

    let repo = CategoryDataSource::new(db);
    let updated = repo
        .update_category(UpdateCategoryParams {
            id: existing.id,
            title: Some("Home & Kitchen".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.title, "Home & Kitchen");

    let fetched = repo.get_category_by_id(existing.id).await.unwrap();
    assert_eq!(fetched.title, "Home & Kitchen");

    Ok(())
}

/// Tests a partial update that carries no title.
///
/// Expected: Ok(Category) identical to the stored row
#[tokio::test]
async fn returns_current_category_when_title_is_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_category(db).await?;

    let repo = CategoryDataSource::new(db);
    let updated = repo
        .update_category(UpdateCategoryParams {
            id: existing.id,
            title: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.title, existing.title);

    Ok(())
}

/// Tests updating a category that doesn't exist.
///
/// Expected: Err(CategoryError::UpdateFailed)
#[tokio::test]
async fn fails_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let result = repo
        .update_category(UpdateCategoryParams {
            id: 99999,
            title: Some("Ghost".to_string()),
        })
        .await;

    assert!(matches!(result, Err(CategoryError::UpdateFailed(_))));

    let result = repo
        .update_category(UpdateCategoryParams {
            id: 99999,
            title: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(CategoryError::UpdateFailed(DbErr::RecordNotFound(_)))
    ));

    Ok(())
}

/// Tests renaming a category to a title another category already uses.
///
/// Expected: Err(CategoryError::UpdateFailed), original title kept
#[tokio::test]
async fn fails_when_title_collides() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::category::CategoryFactory::new(db)
        .title("Books")
        .build()
        .await?;
    let second = factory::category::CategoryFactory::new(db)
        .title("Music")
        .build()
        .await?;

    let repo = CategoryDataSource::new(db);
    let result = repo
        .update_category(UpdateCategoryParams {
            id: second.id,
            title: Some(first.title.clone()),
        })
        .await;

    assert!(matches!(result, Err(CategoryError::UpdateFailed(_))));

    let unchanged = repo.get_category_by_id(second.id).await.unwrap();
    assert_eq!(unchanged.title, "Music");

    Ok(())
}
