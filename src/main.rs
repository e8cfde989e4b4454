//! echo-gateway server entry point.
//!
//! Starts the Axum HTTP server. Persistence is attempted once at startup;
//! if it is unavailable the server still starts in degraded mode.

use tracing_subscriber::EnvFilter;

use echo_gateway::api;
use echo_gateway::app_state::AppState;
use echo_gateway::config::{GatewayConfig, resolve_connection_config};
use echo_gateway::persistence;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (also loads .env)
    let config = GatewayConfig::from_env()?;

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
    tracing::info!(addr = %config.listen_addr, "starting echo-gateway");

    // Database gateway: one attempt, degraded on failure
    let connection = resolve_connection_config()?;
    let store = persistence::init(connection.as_ref(), &config.pool_settings()).await;
    tracing::info!(persistence = store.is_some(), "persistence state resolved");

    let app = api::build_app(AppState::new(store));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
