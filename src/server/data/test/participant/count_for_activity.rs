use super::*;

/// Tests counting is scoped to one activity.
///
/// Expected: Ok with each activity's own count
#[tokio::test]
async fn counts_participants_per_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (busy, _) = factory::create_activity_with_participants(db, 10, 4).await?;
    let (quiet, _) = factory::create_activity_with_participants(db, 10, 1).await?;
    let empty = factory::create_activity(db).await?;

    let repo = ParticipantRepository::new(db);

    assert_eq!(repo.count_for_activity(&busy.name).await?, 4);
    assert_eq!(repo.count_for_activity(&quiet.name).await?, 1);
    assert_eq!(repo.count_for_activity(&empty.name).await?, 0);

    Ok(())
}
