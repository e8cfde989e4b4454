//! PostgreSQL implementation of the persistence layer.

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::MessageStore;
use super::models::Message;
use crate::config::{ConnectionConfig, PoolSettings};
use crate::error::GatewayError;

const CREATE_MESSAGES_TABLE: &str = "CREATE TABLE IF NOT EXISTS messages (\
     id SERIAL PRIMARY KEY, \
     content TEXT NOT NULL, \
     created_at TIMESTAMP DEFAULT NOW()\
     )";

/// PostgreSQL-backed persistence layer using `sqlx::PgPool`.
///
/// Each query checks out its own pooled connection, so concurrent handlers
/// never share a connection.
#[derive(Debug, Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    /// Creates a new persistence layer with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool and establishes its first connection.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the server cannot be
    /// reached or rejects the login within `settings.connect_timeout`.
    pub async fn connect(
        config: &ConnectionConfig,
        settings: &PoolSettings,
    ) -> Result<Self, GatewayError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.connect_timeout)
            .connect_with(connect_options(config))
            .await?;
        Ok(Self::new(pool))
    }

    async fn create_table(&self) -> Result<(), GatewayError> {
        sqlx::query(CREATE_MESSAGES_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert(&self, content: &str) -> Result<(), GatewayError> {
        sqlx::query("INSERT INTO messages (content) VALUES ($1)")
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn select_recent(&self, limit: u32) -> Result<Vec<Message>, GatewayError> {
        let rows = sqlx::query_as::<_, Message>(
            "SELECT id, content, created_at FROM messages ORDER BY id DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

impl MessageStore for PostgresPersistence {
    fn ensure_schema(&self) -> BoxFuture<'_, Result<(), GatewayError>> {
        self.create_table().boxed()
    }

    fn insert_message<'a>(&'a self, content: &'a str) -> BoxFuture<'a, Result<(), GatewayError>> {
        self.insert(content).boxed()
    }

    fn list_recent(&self, limit: u32) -> BoxFuture<'_, Result<Vec<Message>, GatewayError>> {
        self.select_recent(limit).boxed()
    }
}

/// Maps parsed URL parts onto driver options, leaving omitted parts to the
/// driver's `PG*` environment defaults.
fn connect_options(config: &ConnectionConfig) -> PgConnectOptions {
    let mut options = PgConnectOptions::new();
    if !config.database.is_empty() {
        options = options.database(&config.database);
    }
    if let Some(host) = config.host.as_deref() {
        options = options.host(host);
    }
    if let Some(port) = config.port {
        options = options.port(port);
    }
    if let Some(user) = config.user.as_deref() {
        options = options.username(user);
    }
    if let Some(password) = config.password.as_deref() {
        options = options.password(password);
    }
    options
}
