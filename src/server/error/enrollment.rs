use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of participant enrollment at the store boundary.
///
/// The three domain variants are the only outcomes callers dispatch on; anything
/// else the database reports is carried opaquely in `Db`.
#[derive(Error, Debug)]
pub enum EnrollmentError {
    /// No activity with the requested name exists.
    #[error("Activity not found")]
    NotFound,

    /// The activity already has `max_participants` participants.
    #[error("Activity full")]
    Full,

    /// The email is already enrolled in the activity.
    #[error("Student already signed up")]
    AlreadySignedUp,

    /// Unexpected storage failure.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// Converts enrollment errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - `NotFound`, "Activity not found"
/// - 400 Bad Request - `Full`, "Activity is full"
/// - 400 Bad Request - `AlreadySignedUp`, "Student is already signed up"
/// - 400 Bad Request - `Db`, with the raw storage error text
impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Activity not found".to_string()),
            Self::Full => (StatusCode::BAD_REQUEST, "Activity is full".to_string()),
            Self::AlreadySignedUp => (
                StatusCode::BAD_REQUEST,
                "Student is already signed up".to_string(),
            ),
            Self::Db(err) => {
                tracing::debug!("Enrollment failed with storage error: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        (status, Json(ErrorDto { detail })).into_response()
    }
}
