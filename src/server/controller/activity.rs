use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{
    model::{
        activity::ActivityDto,
        api::{ErrorDto, MessageDto},
    },
    server::{error::AppError, service::activity::ActivityService, state::AppState},
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}

/// Unwraps the `email` query, reporting a missing or malformed one as a JSON 400.
fn email_params(query: Result<Query<EmailParams>, QueryRejection>) -> Result<EmailParams, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Get all activities.
///
/// Returns every activity keyed by name, each with its description, schedule,
/// capacity and the emails currently signed up.
///
/// # Returns
/// - `200 OK` - Map of activity name to activity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = BTreeMap<String, ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ActivityService::new(&state.db);

    let activities: BTreeMap<String, ActivityDto> = service
        .list_activities()
        .await?
        .into_iter()
        .map(|(name, activity)| (name, activity.into_dto()))
        .collect();

    Ok((StatusCode::OK, Json(activities)))
}

/// Sign a student up for an activity.
///
/// Looks the activity up first so an unknown name is reported as 404 before any
/// enrollment rule is evaluated.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `activity_name` - Exact, case-sensitive activity name
/// - `query` - Query parameters carrying the student's email
///
/// # Returns
/// - `200 OK` - Student signed up
/// - `400 Bad Request` - Missing email, activity full, student already signed up, or storage failure
/// - `404 Not Found` - Activity not found
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = ACTIVITY_TAG,
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Successfully signed up", body = MessageDto),
        (status = 400, description = "Missing email, activity full or student already signed up", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = email_params(query)?;
    let service = ActivityService::new(&state.db);

    // A storage error here surfaces as 500, while one inside `add_participant` is a 400
    // carrying the raw error text.
    if service.get_activity(&activity_name).await?.is_none() {
        return Err(AppError::NotFound("Activity not found".to_string()));
    }

    service
        .add_participant(&activity_name, &params.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Signed up {} for {}", params.email, activity_name),
        }),
    ))
}

/// Unregister a student from an activity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `activity_name` - Exact, case-sensitive activity name
/// - `query` - Query parameters carrying the student's email
///
/// # Returns
/// - `200 OK` - Student unregistered
/// - `400 Bad Request` - Missing email, or student is not signed up for this activity
/// - `404 Not Found` - Activity not found
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    tag = ACTIVITY_TAG,
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        ("email" = String, Query, description = "Student email")
    ),
    responses(
        (status = 200, description = "Successfully unregistered", body = MessageDto),
        (status = 400, description = "Missing email or student is not signed up", body = ErrorDto),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = email_params(query)?;
    let service = ActivityService::new(&state.db);

    let activity = service
        .get_activity(&activity_name)
        .await?
        .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))?;

    if !activity.has_participant(&params.email) {
        return Err(AppError::BadRequest(
            "Student is not signed up for this activity".to_string(),
        ));
    }

    service
        .remove_participant(&activity_name, &params.email)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Unregistered {} from {}", params.email, activity_name),
        }),
    ))
}
