use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned with every failed request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

/// Body returned by successful signup and unregister requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
