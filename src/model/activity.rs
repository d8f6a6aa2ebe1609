use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An activity as returned by the API, keyed by name in the enclosing map.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityDto {
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}
