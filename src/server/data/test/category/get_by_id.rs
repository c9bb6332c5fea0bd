use super::*;

/// Tests getting a category by ID.
///
/// Expected: Ok(Category) matching the inserted row
#[tokio::test]
async fn gets_category_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_category(db).await?;

    let repo = CategoryDataSource::new(db);
    let category = repo.get_category_by_id(existing.id).await.unwrap();

    assert_eq!(category.id, existing.id);
    assert_eq!(category.title, existing.title);

    Ok(())
}

/// Tests getting a nonexistent category by ID.
///
/// The lookup treats an absent row as a failure rather than an empty result.
///
/// Expected: Err(CategoryError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let result = repo.get_category_by_id(99999).await;

    let err = result.unwrap_err();
    assert!(matches!(err, CategoryError::NotFound(99999)));
    assert_eq!(err.to_string(), "Category 99999 does not exist");

    Ok(())
}

/// Tests a lookup when the query itself fails.
///
/// Expected: Err(CategoryError::Unexpected)
#[tokio::test]
async fn reports_unexpected_error_when_query_fails() -> Result<(), DbErr> {
    // No tables, so every query fails
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let result = repo.get_category_by_id(1).await;

    assert!(matches!(result, Err(CategoryError::Unexpected(_))));

    Ok(())
}
