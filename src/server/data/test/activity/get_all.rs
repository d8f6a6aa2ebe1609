use super::*;

/// Tests listing all activities.
///
/// Expected: Ok with every activity, ordered by name
#[tokio::test]
async fn gets_all_activities_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Programming Class", "Chess Club", "Gym Class"] {
        factory::activity::ActivityFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = ActivityRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|a| a.name).collect();

    assert_eq!(names, vec!["Chess Club", "Gym Class", "Programming Class"]);

    Ok(())
}

/// Tests listing with no activities.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
