//! Activity data repository for database operations.
//!
//! Provides the `ActivityRepository` for reading and seeding activity records. Activities
//! are only ever inserted by seeding; deletion exists for maintenance and cascades to the
//! activity's participant records through the foreign key.

use migration::OnConflict;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::activity::{Activity, ActivitySeed};

/// Repository providing database operations for activities.
///
/// Generic over the connection so the same queries run on a pooled connection or
/// inside a transaction.
pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    /// Creates a new ActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts all activity rows.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Activity::find().count(self.db).await
    }

    /// Inserts activities, leaving rows that already exist untouched.
    ///
    /// Uses `ON CONFLICT (name) DO NOTHING`, so repeated seeding never duplicates or
    /// overwrites an activity.
    ///
    /// # Arguments
    /// - `seeds` - Activities to insert
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_if_absent(&self, seeds: Vec<ActivitySeed>) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for seed in seeds {
            inserted += entity::prelude::Activity::insert(entity::activity::ActiveModel {
                name: sea_orm::ActiveValue::Set(seed.name),
                description: sea_orm::ActiveValue::Set(seed.description),
                schedule: sea_orm::ActiveValue::Set(seed.schedule),
                max_participants: sea_orm::ActiveValue::Set(seed.max_participants),
            })
            .on_conflict(
                OnConflict::column(entity::activity::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(inserted)
    }

    /// Finds an activity by its exact name.
    ///
    /// # Returns
    /// - `Ok(Some(Activity))` - Activity found
    /// - `Ok(None)` - No activity with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, DbErr> {
        let entity = entity::prelude::Activity::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Activity::from_entity))
    }

    /// Gets all activities ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Activity>, DbErr> {
        let entities = entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Activity::from_entity).collect())
    }

    /// Deletes an activity; its participant records are removed by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The activity existed and was deleted
    /// - `Ok(false)` - No activity with that name
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Activity::delete_by_id(name.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
