//! Participant data repository for database operations.
//!
//! Participant records pair an activity name with a student email. The composite
//! primary key enforces one enrollment per (activity, email); capacity is enforced by
//! the service layer.

use sea_orm::{
    sea_query::{Expr, Order},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for participant records.
pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    /// Creates a new ParticipantRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts the participants enrolled in an activity.
    pub async fn count_for_activity(&self, activity_name: &str) -> Result<u64, DbErr> {
        entity::prelude::Participant::find()
            .filter(entity::participant::Column::ActivityName.eq(activity_name))
            .count(self.db)
            .await
    }

    /// Inserts a participant record.
    ///
    /// A duplicate (activity, email) pair fails with a unique constraint violation and an
    /// unknown activity with a foreign key violation; callers inspect `DbErr::sql_err()`.
    pub async fn create(&self, activity_name: &str, email: &str) -> Result<(), DbErr> {
        entity::prelude::Participant::insert(entity::participant::ActiveModel {
            activity_name: sea_orm::ActiveValue::Set(activity_name.to_string()),
            email: sea_orm::ActiveValue::Set(email.to_string()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes a participant record if present.
    ///
    /// # Returns
    /// - `Ok(true)` - A record was deleted
    /// - `Ok(false)` - No such enrollment
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, activity_name: &str, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Participant::delete_many()
            .filter(entity::participant::Column::ActivityName.eq(activity_name))
            .filter(entity::participant::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the emails enrolled in an activity in insertion order.
    pub async fn get_emails_for_activity(&self, activity_name: &str) -> Result<Vec<String>, DbErr> {
        let entities = entity::prelude::Participant::find()
            .filter(entity::participant::Column::ActivityName.eq(activity_name))
            .order_by(Expr::cust("rowid"), Order::Asc)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|p| p.email).collect())
    }

    /// Gets every participant record in insertion order as (activity_name, email) pairs.
    pub async fn get_all(&self) -> Result<Vec<(String, String)>, DbErr> {
        let entities = entity::prelude::Participant::find()
            .order_by(Expr::cust("rowid"), Order::Asc)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|p| (p.activity_name, p.email))
            .collect())
    }
}
