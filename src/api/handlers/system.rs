//! System endpoints: greeting.

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::app_state::AppState;

/// Fixed plain-text body served at `/`.
pub const GREETING: &str = "Hello, Serverless! 🚀\n";

/// `GET /` — Plain-text greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Greeting",
    description = "Returns a fixed plain-text greeting. Doubles as a liveness probe.",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain"),
    )
)]
pub async fn greeting_handler() -> impl IntoResponse {
    (StatusCode::OK, GREETING)
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(greeting_handler))
}
