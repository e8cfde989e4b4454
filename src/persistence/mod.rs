//! Persistence layer: the append-only `messages` table.
//!
//! Handlers talk to storage through the object-safe [`MessageStore`]
//! trait. [`PostgresPersistence`] is the production backend;
//! [`InMemoryStore`] has the same semantics and backs the HTTP tests.
//!
//! [`init`] performs the one startup connection attempt. It never fails:
//! a missing configuration or an unreachable database yields `None`, and
//! the service runs in degraded mode for the rest of the process lifetime.

pub mod memory;
pub mod models;
pub mod postgres;

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::{ConnectionConfig, PoolSettings};
use crate::error::GatewayError;

pub use memory::InMemoryStore;
pub use models::Message;
pub use postgres::PostgresPersistence;

/// Number of rows `GET /messages` returns.
pub const RECENT_MESSAGES_LIMIT: u32 = 10;

/// Storage operations the HTTP surface needs.
pub trait MessageStore: Send + Sync + std::fmt::Debug {
    /// Creates the `messages` table if it does not exist. Idempotent.
    fn ensure_schema(&self) -> BoxFuture<'_, Result<(), GatewayError>>;

    /// Appends one message.
    fn insert_message<'a>(&'a self, content: &'a str) -> BoxFuture<'a, Result<(), GatewayError>>;

    /// Returns up to `limit` messages, highest id first.
    fn list_recent(&self, limit: u32) -> BoxFuture<'_, Result<Vec<Message>, GatewayError>>;
}

/// Shared handle stored in the application state.
pub type SharedStore = Arc<dyn MessageStore>;

/// Connects to PostgreSQL and prepares the schema.
///
/// Returns `None` (after logging once) if `config` is absent, the connection
/// attempt fails, or the schema statement fails.
pub async fn init(config: Option<&ConnectionConfig>, settings: &PoolSettings) -> Option<SharedStore> {
    let Some(config) = config else {
        tracing::warn!("DATABASE_URL not set; persistence disabled");
        return None;
    };

    let store = match PostgresPersistence::connect(config, settings).await {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!(
                error = %e,
                host = config.host.as_deref().unwrap_or("default"),
                database = %config.database,
                "database connection failed; persistence disabled"
            );
            return None;
        }
    };

    if let Err(e) = store.ensure_schema().await {
        tracing::error!(error = %e, "schema creation failed; persistence disabled");
        return None;
    }

    tracing::info!(database = %config.database, "persistence ready");
    Some(Arc::new(store))
}
