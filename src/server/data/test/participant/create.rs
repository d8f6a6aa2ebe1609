use super::*;

/// Tests enrolling a participant.
///
/// Expected: Ok with the record stored
#[tokio::test]
async fn creates_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.create(&activity.name, "michael@mergington.edu").await?;

    let stored = entity::prelude::Participant::find_by_id((
        activity.name.clone(),
        "michael@mergington.edu".to_string(),
    ))
    .one(db)
    .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a duplicate enrollment violates the unique constraint.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn rejects_duplicate_with_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.create(&activity.name, "emma@mergington.edu").await?;

    let err = repo
        .create(&activity.name, "emma@mergington.edu")
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that the same email may enroll in different activities.
///
/// Expected: Ok for both enrollments
#[tokio::test]
async fn allows_same_email_in_different_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chess = factory::create_activity(db).await?;
    let art = factory::create_activity(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.create(&chess.name, "sophia@mergington.edu").await?;
    repo.create(&art.name, "sophia@mergington.edu").await?;

    assert_eq!(entity::prelude::Participant::find().all(db).await?.len(), 2);

    Ok(())
}

/// Tests that enrolling in an unknown activity fails the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn rejects_unknown_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ParticipantRepository::new(db);
    let result = repo.create("Nonexistent Club", "john@mergington.edu").await;

    assert!(result.is_err());

    Ok(())
}
