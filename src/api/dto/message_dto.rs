//! DTOs for saving and listing messages.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::persistence::Message;

/// Request body for `POST /save`. Documentation only: the handler accepts
/// any body and falls back to an empty message.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaveRequest {
    /// Text to store. Defaults to `""`.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for a successful `POST /save`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveResponse {
    /// Always `"saved"`.
    pub status: String,
    /// The stored text.
    pub message: String,
}

impl SaveResponse {
    /// Wraps the text that was stored.
    #[must_use]
    pub fn saved(message: String) -> Self {
        Self {
            status: "saved".to_string(),
            message,
        }
    }
}

/// One entry of the `GET /messages` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Row ID.
    pub id: i32,
    /// Message content.
    pub text: String,
    /// Insertion time as ISO-8601 without offset.
    pub time: String,
}

impl From<Message> for MessageDto {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            text: m.content,
            time: iso_timestamp(&m.created_at),
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SS`, plus `.ffffff` when the microseconds are non-zero.
#[must_use]
pub fn iso_timestamp(ts: &NaiveDateTime) -> String {
    let base = ts.format("%Y-%m-%dT%H:%M:%S");
    let micros = (ts.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        base.to_string()
    } else {
        format!("{base}.{micros:06}")
    }
}
