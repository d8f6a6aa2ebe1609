use super::*;

/// Tests emails come back in signup order rather than sorted.
///
/// Expected: Ok with emails in insertion order
#[tokio::test]
async fn returns_emails_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;
    let emails = [
        "zoe@mergington.edu",
        "adam@mergington.edu",
        "mia@mergington.edu",
    ];

    let repo = ParticipantRepository::new(db);
    for email in emails {
        repo.create(&activity.name, email).await?;
    }

    assert_eq!(repo.get_emails_for_activity(&activity.name).await?, emails);

    Ok(())
}

/// Tests listing every record across activities.
///
/// Expected: Ok with (activity, email) pairs in insertion order
#[tokio::test]
async fn gets_all_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chess = factory::create_activity(db).await?;
    let art = factory::create_activity(db).await?;

    let repo = ParticipantRepository::new(db);
    repo.create(&art.name, "b@mergington.edu").await?;
    repo.create(&chess.name, "a@mergington.edu").await?;

    assert_eq!(
        repo.get_all().await?,
        vec![
            (art.name.clone(), "b@mergington.edu".to_string()),
            (chess.name.clone(), "a@mergington.edu".to_string()),
        ]
    );

    Ok(())
}
