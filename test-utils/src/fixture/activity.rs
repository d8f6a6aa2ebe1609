//! Activity fixtures for creating in-memory test data.

use entity::activity;

/// Default test activity name.
pub const DEFAULT_NAME: &str = "Chess Club";

/// Default test activity description.
pub const DEFAULT_DESCRIPTION: &str = "Learn strategies and compete in chess tournaments";

/// Default test activity schedule.
pub const DEFAULT_SCHEDULE: &str = "Fridays, 3:30 PM - 5:00 PM";

/// Default capacity for test activities.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 12;

/// Creates an activity entity model with default values.
///
/// # Default Values
/// - name: `"Chess Club"`
/// - description: `"Learn strategies and compete in chess tournaments"`
/// - schedule: `"Fridays, 3:30 PM - 5:00 PM"`
/// - max_participants: `12`
pub fn entity() -> activity::Model {
    activity::Model {
        name: DEFAULT_NAME.to_string(),
        description: DEFAULT_DESCRIPTION.to_string(),
        schedule: DEFAULT_SCHEDULE.to_string(),
        max_participants: DEFAULT_MAX_PARTICIPANTS,
    }
}

/// Creates an activity entity builder for customization.
pub fn entity_builder() -> ActivityEntityBuilder {
    ActivityEntityBuilder::default()
}

/// Builder for creating customized activity entity models.
pub struct ActivityEntityBuilder {
    entity: activity::Model,
}

impl Default for ActivityEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl ActivityEntityBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.entity.schedule = schedule.into();
        self
    }

    pub fn max_participants(mut self, max_participants: i32) -> Self {
        self.entity.max_participants = max_participants;
        self
    }

    pub fn build(self) -> activity::Model {
        self.entity
    }
}
