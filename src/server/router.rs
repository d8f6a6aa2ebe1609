use axum::{
    routing::{delete, get, post},
    Router,
};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;

use crate::{
    model::{
        activity::ActivityDto,
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::{
            activity::{get_activities, signup_for_activity, unregister_from_activity},
            root::{openapi, root},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mergington High School API",
        description = "API for viewing and signing up for extracurricular activities"
    ),
    paths(
        crate::server::controller::root::root,
        crate::server::controller::activity::get_activities,
        crate::server::controller::activity::signup_for_activity,
        crate::server::controller::activity::unregister_from_activity,
    ),
    components(schemas(ActivityDto, ErrorDto, MessageDto))
)]
pub struct ApiDoc;

/// Builds the application routes.
///
/// Files under `static_dir` are served at `/static`.
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/openapi.json", get(openapi))
        .route("/activities", get(get_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
}
