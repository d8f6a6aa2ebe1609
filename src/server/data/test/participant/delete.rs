use super::*;

/// Tests removing an enrolled participant.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (activity, participants) = factory::create_activity_with_participants(db, 10, 2).await?;

    let repo = ParticipantRepository::new(db);
    let deleted = repo.delete(&activity.name, &participants[0].email).await?;

    assert!(deleted);
    assert_eq!(
        repo.get_emails_for_activity(&activity.name).await?,
        vec![participants[1].email.clone()]
    );

    Ok(())
}

/// Tests removing an email that is not enrolled.
///
/// Expected: Ok(false), nothing changes
#[tokio::test]
async fn returns_false_when_not_enrolled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (activity, _) = factory::create_activity_with_participants(db, 10, 1).await?;

    let repo = ParticipantRepository::new(db);
    let deleted = repo.delete(&activity.name, "ghost@mergington.edu").await?;

    assert!(!deleted);
    assert_eq!(repo.count_for_activity(&activity.name).await?, 1);

    Ok(())
}

/// Tests that deletion is scoped to the given activity.
///
/// Expected: Enrollment of the same email in another activity is kept
#[tokio::test]
async fn only_deletes_from_given_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chess = factory::create_activity(db).await?;
    let art = factory::create_activity(db).await?;
    factory::create_participant(db, &chess.name, "olivia@mergington.edu").await?;
    factory::create_participant(db, &art.name, "olivia@mergington.edu").await?;

    let repo = ParticipantRepository::new(db);
    repo.delete(&chess.name, "olivia@mergington.edu").await?;

    assert!(repo.get_emails_for_activity(&chess.name).await?.is_empty());
    assert_eq!(
        repo.get_emails_for_activity(&art.name).await?,
        vec!["olivia@mergington.edu"]
    );

    Ok(())
}
