//! Message handlers: save and list.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::dto::{MessageDto, SaveRequest, SaveResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};
use crate::persistence::RECENT_MESSAGES_LIMIT;

/// `POST /save` — Store a message.
///
/// # Errors
///
/// Returns [`GatewayError::DbNotConnected`] in degraded mode and
/// [`GatewayError::PersistenceError`] if the insert fails.
#[utoipa::path(
    post,
    path = "/save",
    tag = "Messages",
    summary = "Save a message",
    description = "Stores the `message` field of the posted object. A missing field, or a body that is not a JSON object, stores an empty string.",
    request_body = SaveRequest,
    responses(
        (status = 200, description = "Message stored", body = SaveResponse),
        (status = 500, description = "Database unavailable", body = ErrorResponse),
    )
)]
pub async fn save_message(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let store = state.store()?;
    let message = message_field(&body);

    store.insert_message(&message).await?;
    tracing::debug!(chars = message.chars().count(), "message saved");

    Ok(Json(SaveResponse::saved(message)))
}

/// `GET /messages` — List the most recent messages.
///
/// # Errors
///
/// Returns [`GatewayError::DbNotConnected`] in degraded mode and
/// [`GatewayError::PersistenceError`] if the query fails.
#[utoipa::path(
    get,
    path = "/messages",
    tag = "Messages",
    summary = "List recent messages",
    description = "Returns the 10 most recent messages, highest id first.",
    responses(
        (status = 200, description = "Recent messages", body = Vec<MessageDto>),
        (status = 500, description = "Database unavailable", body = ErrorResponse),
    )
)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let store = state.store()?;
    let rows = store.list_recent(RECENT_MESSAGES_LIMIT).await?;
    let data: Vec<MessageDto> = rows.into_iter().map(MessageDto::from).collect();
    Ok(Json(data))
}

/// Message routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/save", post(save_message))
        .route("/messages", get(list_messages))
}

/// Pulls `message` out of a raw body.
///
/// Anything other than a JSON object is treated as `{}`. Strings are taken
/// as-is, a missing or `null` field becomes `""`, other values are stored as
/// their compact JSON text.
fn message_field(body: &[u8]) -> String {
    let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
        return String::new();
    };
    match fields.remove("message") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
