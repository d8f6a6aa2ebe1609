use super::*;

/// Tests a successful signup.
///
/// Expected: Ok with the email enrolled
#[tokio::test]
async fn enrolls_participant() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let service = ActivityService::new(db);
    service
        .add_participant(&activity.name, "a@example.com")
        .await?;

    let view = service.get_activity(&activity.name).await?.unwrap();
    assert_eq!(view.participants, vec!["a@example.com"]);

    Ok(())
}

/// Tests signing up the same email twice.
///
/// Expected: first Ok, second Err(EnrollmentError::AlreadySignedUp) with one record kept
#[tokio::test]
async fn rejects_duplicate_signup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::activity::ActivityFactory::new(db)
        .name("Chess Club")
        .build()
        .await?;

    let service = ActivityService::new(db);
    service.add_participant("Chess Club", "a@example.com").await?;
    let result = service.add_participant("Chess Club", "a@example.com").await;

    assert!(matches!(result, Err(EnrollmentError::AlreadySignedUp)));
    let view = service.get_activity("Chess Club").await?.unwrap();
    assert_eq!(view.participants.len(), 1);

    Ok(())
}

/// Tests capacity enforcement.
///
/// Verifies that after `max_participants` successful signups the next one fails.
///
/// Expected: M signups Ok, the (M+1)-th Err(EnrollmentError::Full)
#[tokio::test]
async fn rejects_signup_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .max_participants(3)
        .build()
        .await?;

    let service = ActivityService::new(db);
    for n in 0..3 {
        service
            .add_participant(&activity.name, &format!("student{}@mergington.edu", n))
            .await?;
    }

    let result = service
        .add_participant(&activity.name, "late@mergington.edu")
        .await;

    assert!(matches!(result, Err(EnrollmentError::Full)));
    assert_eq!(
        service
            .get_activity(&activity.name)
            .await?
            .unwrap()
            .participants
            .len(),
        3
    );

    Ok(())
}

/// Tests that a full activity reports Full even for an already enrolled email.
///
/// Expected: Err(EnrollmentError::Full)
#[tokio::test]
async fn reports_full_before_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (activity, participants) = factory::create_activity_with_participants(db, 1, 1).await?;

    let service = ActivityService::new(db);
    let result = service
        .add_participant(&activity.name, &participants[0].email)
        .await;

    assert!(matches!(result, Err(EnrollmentError::Full)));

    Ok(())
}

/// Tests signing up for an unknown activity.
///
/// Expected: Err(EnrollmentError::NotFound)
#[tokio::test]
async fn rejects_unknown_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ActivityService::new(db);
    let result = service
        .add_participant("Nonexistent Club", "a@example.com")
        .await;

    assert!(matches!(result, Err(EnrollmentError::NotFound)));

    Ok(())
}

/// Tests that a failed signup leaves the database usable.
///
/// Verifies the transaction is rolled back so a later signup for another email works.
///
/// Expected: Ok for the follow-up signup
#[tokio::test]
async fn recovers_after_failed_signup() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let service = ActivityService::new(db);
    service.add_participant(&activity.name, "a@example.com").await?;
    let _ = service.add_participant(&activity.name, "a@example.com").await;
    service.add_participant(&activity.name, "b@example.com").await?;

    let view = service.get_activity(&activity.name).await?.unwrap();
    assert_eq!(view.participants, vec!["a@example.com", "b@example.com"]);

    Ok(())
}
