//! Participant factory for enrolling test students in activities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Enrolls `email` in the activity named `activity_name`.
///
/// The activity must already exist; the foreign key is enforced by SQLite.
///
/// # Returns
/// - `Ok(entity::participant::Model)` - Created participant record
/// - `Err(DbErr)` - Database error during insert (unknown activity, duplicate enrollment)
pub async fn create_participant(
    db: &DatabaseConnection,
    activity_name: impl Into<String>,
    email: impl Into<String>,
) -> Result<entity::participant::Model, DbErr> {
    entity::participant::ActiveModel {
        activity_name: ActiveValue::Set(activity_name.into()),
        email: ActiveValue::Set(email.into()),
    }
    .insert(db)
    .await
}
