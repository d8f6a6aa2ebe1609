pub use super::activity::Entity as Activity;
pub use super::participant::Entity as Participant;
