//! OpenAPI document for the HTTP surface.

use axum::Json;
use axum::response::IntoResponse;
use utoipa::OpenApi;

use crate::api::dto::{EchoResponse, MessageDto, SaveRequest, SaveResponse};
use crate::api::handlers::{echo, messages, system};
use crate::error::ErrorResponse;

/// Generated OpenAPI specification for all routes.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "echo-gateway", description = "Greeting, JSON echo, and message log"),
    paths(
        system::greeting_handler,
        echo::echo,
        messages::save_message,
        messages::list_messages,
    ),
    components(schemas(EchoResponse, SaveRequest, SaveResponse, MessageDto, ErrorResponse)),
    tags(
        (name = "System", description = "Greeting and liveness"),
        (name = "Echo", description = "Reflect posted JSON"),
        (name = "Messages", description = "Append-only message log"),
    )
)]
pub struct ApiDoc;

/// `GET /openapi.json` — Serve the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/echo", "/save", "/messages"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
