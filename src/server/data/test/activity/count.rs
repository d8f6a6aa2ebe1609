use super::*;

/// Tests counting an empty activities table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_zero_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);

    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests counting after activities have been created.
///
/// Expected: Ok with number of created activities
#[tokio::test]
async fn counts_existing_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_activity(db).await?;
    factory::create_activity(db).await?;
    factory::create_activity(db).await?;

    let repo = ActivityRepository::new(db);

    assert_eq!(repo.count().await?, 3);

    Ok(())
}
