//! JSON echo handler.

use axum::body::Bytes;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::EchoResponse;
use crate::app_state::AppState;

/// `POST /echo` — Reflect the posted JSON.
///
/// The body is parsed leniently: an empty or malformed body is echoed as
/// `null` instead of being rejected.
#[utoipa::path(
    post,
    path = "/echo",
    tag = "Echo",
    summary = "Echo JSON",
    description = "Returns the posted JSON value together with the length of its textual form.",
    request_body(content = serde_json::Value, description = "Any JSON value"),
    responses(
        (status = 200, description = "Echoed value", body = EchoResponse),
    )
)]
pub async fn echo(body: Bytes) -> impl IntoResponse {
    let value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    tracing::debug!(bytes = body.len(), "echo request");
    Json(EchoResponse::for_value(value))
}

/// Echo routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/echo", post(echo))
}
