//! DTOs for the JSON echo endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::echo;

/// Response body for `POST /echo`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EchoResponse {
    /// Always `"received"`.
    pub status: String,
    /// The parsed request body, or `null` if it was empty or not JSON.
    #[schema(value_type = Object)]
    pub you_sent: serde_json::Value,
    /// Character length of the value's textual form; 0 for falsy values.
    pub length: usize,
}

impl EchoResponse {
    /// Builds the echo for an already parsed value.
    #[must_use]
    pub fn for_value(value: serde_json::Value) -> Self {
        let length = echo::echo_length(&value);
        Self {
            status: "received".to_string(),
            you_sent: value,
            length,
        }
    }
}
