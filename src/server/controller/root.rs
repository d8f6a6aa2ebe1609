use axum::{response::Redirect, Json};
use utoipa::OpenApi;

use crate::server::router::ApiDoc;

/// Landing page of the static front-end.
pub const INDEX_PAGE: &str = "/static/index.html";

/// Redirect the site root to the static front-end.
///
/// # Returns
/// - `307 Temporary Redirect` - To `/static/index.html`
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 307, description = "Redirect to the front-end landing page")
    ),
)]
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

/// Serve the generated OpenAPI document.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
