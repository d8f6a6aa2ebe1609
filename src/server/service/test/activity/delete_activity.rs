use super::*;

/// Tests deleting an activity removes its participants.
///
/// Expected: Ok(true), activity and its participant records gone
#[tokio::test]
async fn deletes_activity_with_participants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (activity, _) = factory::create_activity_with_participants(db, 10, 3).await?;

    let service = ActivityService::new(db);

    assert!(service.delete_activity(&activity.name).await?);
    assert!(service.get_activity(&activity.name).await?.is_none());
    assert_eq!(entity::prelude::Participant::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an unknown activity.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ActivityService::new(db);

    assert!(!service.delete_activity("Nonexistent Club").await?);

    Ok(())
}
