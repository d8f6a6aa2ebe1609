//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an activity with the given capacity and `count` enrolled participants.
///
/// Participant emails are generated as `student{n}@mergington.edu` and inserted in
/// ascending order of `n`.
///
/// # Arguments
/// - `db` - Database connection
/// - `max_participants` - Capacity of the created activity
/// - `count` - Number of participants to enroll
///
/// # Returns
/// - `Ok((activity, participants))` - Created activity and participant records in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_activity_with_participants(
    db: &DatabaseConnection,
    max_participants: i32,
    count: usize,
) -> Result<(entity::activity::Model, Vec<entity::participant::Model>), DbErr> {
    let activity = crate::factory::activity::ActivityFactory::new(db)
        .max_participants(max_participants)
        .build()
        .await?;

    let mut participants = Vec::with_capacity(count);
    for n in 0..count {
        let participant = crate::factory::participant::create_participant(
            db,
            &activity.name,
            format!("student{}@mergington.edu", n),
        )
        .await?;
        participants.push(participant);
    }

    Ok((activity, participants))
}
