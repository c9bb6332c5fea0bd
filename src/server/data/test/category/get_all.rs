use super::*;

/// Tests listing all categories.
///
/// Expected: One domain category per stored row
#[tokio::test]
async fn gets_all_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_categories(db, 3).await?;

    let repo = CategoryDataSource::new(db);
    let categories = repo.get_all_categories().await.unwrap();

    assert_eq!(categories.len(), 3);
    for entity in created {
        assert!(categories
            .iter()
            .any(|c| c.id == entity.id && c.title == entity.title));
    }

    Ok(())
}

/// Tests listing when no categories exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let categories = repo.get_all_categories().await.unwrap();

    assert!(categories.is_empty());

    Ok(())
}

/// Tests that a failing list query hands back the database error itself.
///
/// Expected: Err(CategoryError::Database) whose message is the database error's
#[tokio::test]
async fn passes_database_error_through() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryDataSource::new(db);
    let result = repo.get_all_categories().await;

    match result {
        Err(CategoryError::Database(inner)) => {
            let message = inner.to_string();
            assert_eq!(CategoryError::Database(inner).to_string(), message);
        }
        other => panic!("expected database error, got {:?}", other),
    }

    Ok(())
}
