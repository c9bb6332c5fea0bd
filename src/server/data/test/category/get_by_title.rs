use super::*;

/// Tests getting a category by its exact title.
///
/// Expected: Ok(Some(Category))
#[tokio::test]
async fn gets_category_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let created = repo
        .create_category(CreateCategoryParams {
            title: "Electronics".to_string(),
        })
        .await
        .unwrap();

    let found = repo
        .get_category_by_title("Electronics".to_string())
        .await
        .unwrap();

    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests getting a category by a title nobody uses.
///
/// Absence is not an error for title lookups.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .title("Electronics")
        .build()
        .await?;

    let repo = CategoryDataSource::new(db);
    let found = repo.get_category_by_title("Nope".to_string()).await.unwrap();

    assert!(found.is_none());

    Ok(())
}

/// Tests that title matching is exact.
///
/// Expected: Ok(None) for a title that only differs by case
#[tokio::test]
async fn does_not_match_different_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::CategoryFactory::new(db)
        .title("Electronics")
        .build()
        .await?;

    let repo = CategoryDataSource::new(db);
    let found = repo
        .get_category_by_title("electronics".to_string())
        .await
        .unwrap();

    assert!(found.is_none());

    Ok(())
}

/// Tests a title lookup when the query itself fails.
///
/// Expected: Err(CategoryError::Unexpected)
#[tokio::test]
async fn reports_unexpected_error_when_query_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let result = repo.get_category_by_title("Electronics".to_string()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, CategoryError::Unexpected(_)));
    assert_eq!(err.to_string(), "Unexpected error");

    Ok(())
}
