//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Storage
//! related variants all collapse into the same 500 body so clients see one
//! shape whether the database was never configured or failed mid-request:
//! ```json
//! { "error": "DB not connected" }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned for every storage related failure.
pub const DB_NOT_CONNECTED: &str = "DB not connected";

/// Structured JSON error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// `DATABASE_URL` is set but is not a URL.
    #[error("invalid database url: {0}")]
    InvalidDatabaseUrl(String),

    /// Any other unusable configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No storage handle exists (degraded mode).
    #[error("DB not connected")]
    DbNotConnected,

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDatabaseUrl(_)
            | Self::InvalidConfig(_)
            | Self::DbNotConnected
            | Self::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message exposed to HTTP clients.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::DbNotConnected | Self::PersistenceError(_) => DB_NOT_CONNECTED.to_string(),
            Self::InvalidDatabaseUrl(_) | Self::InvalidConfig(_) => self.to_string(),
        }
    }
}

impl From<sqlx::Error> for GatewayError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let Self::PersistenceError(ref detail) = self {
            tracing::error!(error = %detail, "storage operation failed");
        }
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.public_message(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
