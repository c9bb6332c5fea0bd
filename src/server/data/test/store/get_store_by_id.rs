use super::*;

/// Tests getting a store by ID.
///
/// Expected: Ok(Store) matching the inserted row
#[tokio::test]
async fn gets_store_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::store::StoreFactory::new(db)
        .name("Downtown")
        .address(Some("12 High Street"))
        .build()
        .await?;

    let repo = StoreDataSource::new(db);
    let store = repo.get_store_by_id(existing.id).await?;

    assert_eq!(store.id, existing.id);
    assert_eq!(store.name, "Downtown");
    assert_eq!(store.address.as_deref(), Some("12 High Street"));

    Ok(())
}

/// Tests getting a nonexistent store by ID.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_store(db).await?;

    let repo = StoreDataSource::new(db);
    let result = repo.get_store_by_id(99999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
