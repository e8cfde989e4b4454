//! Database models for stored messages.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored row from the `messages` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    /// `SERIAL` row ID, assigned by the database.
    pub id: i32,
    /// Message body; may be empty.
    pub content: String,
    /// Insertion timestamp (`TIMESTAMP` without time zone).
    pub created_at: NaiveDateTime,
}
