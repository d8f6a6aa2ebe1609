//! Activity factory for creating test activity entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test activities with customizable fields.
///
/// Defaults come from `fixture::activity` with a unique name per factory so several
/// activities can coexist in one test database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::activity::ActivityFactory;
///
/// let activity = ActivityFactory::new(&db)
///     .name("Programming Class")
///     .max_participants(20)
///     .build()
///     .await?;
/// ```
pub struct ActivityFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::activity::Model,
}

impl<'a> ActivityFactory<'a> {
    /// Creates a new ActivityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Activity {id}"` where id is auto-incremented
    /// - description, schedule, max_participants: from `fixture::activity`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::activity::entity_builder()
            .name(format!("Activity {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the activity name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the activity description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the activity schedule.
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.entity.schedule = schedule.into();
        self
    }

    /// Sets the maximum number of participants.
    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.entity.max_participants = max_participants;
        self
    }

    /// Builds and inserts the activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::activity::Model)` - Created activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            schedule: ActiveValue::Set(self.entity.schedule),
            max_participants: ActiveValue::Set(self.entity.max_participants),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an activity with default values.
///
/// Shorthand for `ActivityFactory::new(db).build().await`.
pub async fn create_activity(db: &DatabaseConnection) -> Result<entity::activity::Model, DbErr> {
    ActivityFactory::new(db).build().await
}
