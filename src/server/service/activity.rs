use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};
use std::{collections::BTreeMap, path::Path};

use crate::server::{
    data::{activity::ActivityRepository, participant::ParticipantRepository},
    error::{enrollment::EnrollmentError, AppError},
    model::activity::{ActivitySeed, ActivityWithParticipants},
    seed,
};

/// Durable store over activities and their participants.
///
/// Every call reads or writes the database directly; nothing is cached between calls.
pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the schema if absent and seeds an empty database.
    ///
    /// Safe to call on every startup: migrations that already ran are skipped, and the
    /// seed file is only read when the activities table has no rows. A missing seed file
    /// leaves the database empty.
    pub async fn ensure_initialized(&self, seed_path: &Path) -> Result<(), AppError> {
        Migrator::up(self.db, None).await?;

        let existing = ActivityRepository::new(self.db).count().await?;
        if existing > 0 {
            tracing::debug!("Skipping seeding, {} activities already stored", existing);
            return Ok(());
        }

        match seed::load_seed(seed_path)? {
            Some(seeds) => {
                let inserted = self.seed(seeds).await?;
                tracing::info!(
                    "Seeded {} activities from {}",
                    inserted,
                    seed_path.display()
                );
            }
            None => {
                tracing::warn!(
                    "Seed file {} not found, starting with no activities",
                    seed_path.display()
                );
            }
        }

        Ok(())
    }

    /// Inserts seed activities, leaving existing ones untouched.
    ///
    /// Returns the number of activities actually inserted.
    pub async fn seed(&self, seeds: Vec<ActivitySeed>) -> Result<u64, AppError> {
        let inserted = ActivityRepository::new(self.db)
            .insert_if_absent(seeds)
            .await?;

        Ok(inserted)
    }

    /// Gets every activity with its current participants, keyed by name.
    pub async fn list_activities(
        &self,
    ) -> Result<BTreeMap<String, ActivityWithParticipants>, AppError> {
        let activities = ActivityRepository::new(self.db).get_all().await?;

        let mut result: BTreeMap<String, ActivityWithParticipants> = activities
            .into_iter()
            .map(|activity| {
                (
                    activity.name.clone(),
                    ActivityWithParticipants {
                        activity,
                        participants: Vec::new(),
                    },
                )
            })
            .collect();

        if result.is_empty() {
            return Ok(result);
        }

        for (activity_name, email) in ParticipantRepository::new(self.db).get_all().await? {
            if let Some(entry) = result.get_mut(&activity_name) {
                entry.participants.push(email);
            }
        }

        Ok(result)
    }

    /// Gets a single activity with its participants.
    ///
    /// Returns `None` when no activity has that exact name.
    pub async fn get_activity(
        &self,
        name: &str,
    ) -> Result<Option<ActivityWithParticipants>, AppError> {
        let Some(activity) = ActivityRepository::new(self.db).find_by_name(name).await? else {
            return Ok(None);
        };

        let participants = ParticipantRepository::new(self.db)
            .get_emails_for_activity(name)
            .await?;

        Ok(Some(ActivityWithParticipants {
            activity,
            participants,
        }))
    }

    /// Enrolls `email` in the activity.
    ///
    /// The existence check, capacity check and insert run in one transaction. Failures
    /// are reported in that order: unknown activity, full activity, duplicate signup.
    pub async fn add_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), EnrollmentError> {
        let txn = self.db.begin().await?;

        let result = Self::enroll(&txn, activity_name, email).await;

        if result.is_ok() {
            txn.commit().await?;
            tracing::info!("Signed up {} for {}", email, activity_name);
        } else {
            txn.rollback().await?;
        }

        result
    }

    async fn enroll<C: ConnectionTrait>(
        db: &C,
        activity_name: &str,
        email: &str,
    ) -> Result<(), EnrollmentError> {
        let activity = ActivityRepository::new(db)
            .find_by_name(activity_name)
            .await?
            .ok_or(EnrollmentError::NotFound)?;

        let participants = ParticipantRepository::new(db);

        let count = participants.count_for_activity(activity_name).await?;
        if activity.is_full(count) {
            return Err(EnrollmentError::Full);
        }

        match participants.create(activity_name, email).await {
            Ok(()) => Ok(()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(EnrollmentError::AlreadySignedUp)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes `email` from the activity if enrolled.
    ///
    /// Removing an email that is not enrolled is a no-op. Callers that must tell the two
    /// cases apart check membership first.
    pub async fn remove_participant(&self, activity_name: &str, email: &str) -> Result<(), AppError> {
        let deleted = ParticipantRepository::new(self.db)
            .delete(activity_name, email)
            .await?;

        if deleted {
            tracing::info!("Unregistered {} from {}", email, activity_name);
        }

        Ok(())
    }

    /// Deletes an activity together with its participant records.
    ///
    /// Returns `false` when no activity has that name.
    pub async fn delete_activity(&self, name: &str) -> Result<bool, AppError> {
        let deleted = ActivityRepository::new(self.db).delete(name).await?;

        Ok(deleted)
    }
}
