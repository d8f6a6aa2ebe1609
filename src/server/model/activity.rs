//! Activity domain models and parameters.
//!
//! Provides the domain model for activities, the read model that combines an activity
//! with its live participant list, and the parameter type used when seeding.

use crate::model::activity::ActivityDto;

/// An extracurricular activity without its participants.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// Unique, case-sensitive activity name.
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Capacity; signups are refused once this many participants are enrolled.
    pub max_participants: i32,
}

impl Activity {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            name: entity.name,
            description: entity.description,
            schedule: entity.schedule,
            max_participants: entity.max_participants,
        }
    }

    /// Whether `count` enrolled participants leaves no room for another.
    pub fn is_full(&self, count: u64) -> bool {
        i64::try_from(count).unwrap_or(i64::MAX) >= i64::from(self.max_participants)
    }
}

/// An activity joined with the emails currently enrolled in it.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityWithParticipants {
    pub activity: Activity,
    /// Participant emails in insertion order.
    pub participants: Vec<String>,
}

impl ActivityWithParticipants {
    /// Whether `email` is currently enrolled (exact, case-sensitive match).
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Converts to the API representation.
    ///
    /// The activity name is not part of the DTO; it is the key of the enclosing map.
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            description: self.activity.description,
            schedule: self.activity.schedule,
            max_participants: self.activity.max_participants,
            participants: self.participants,
        }
    }
}

/// Parameters for inserting one activity from the seed dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
}
