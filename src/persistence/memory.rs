//! In-process message store.
//!
//! Mirrors the PostgreSQL table semantics: ids start at 1 and are never
//! reused, `created_at` is stamped on insert, listing is newest first.

use chrono::Utc;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tokio::sync::RwLock;

use super::MessageStore;
use super::models::Message;
use crate::error::GatewayError;

/// A [`MessageStore`] kept in memory behind a [`RwLock`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<Vec<Message>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored messages.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    async fn push(&self, content: &str) {
        let mut rows = self.rows.write().await;
        let id = rows.last().map_or(1, |last| last.id.saturating_add(1));
        rows.push(Message {
            id,
            content: content.to_string(),
            created_at: Utc::now().naive_utc(),
        });
    }

    async fn newest(&self, limit: u32) -> Vec<Message> {
        let rows = self.rows.read().await;
        rows.iter()
            .rev()
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

impl MessageStore for InMemoryStore {
    fn ensure_schema(&self) -> BoxFuture<'_, Result<(), GatewayError>> {
        async { Ok::<(), GatewayError>(()) }.boxed()
    }

    fn insert_message<'a>(&'a self, content: &'a str) -> BoxFuture<'a, Result<(), GatewayError>> {
        async move {
            self.push(content).await;
            Ok(())
        }
        .boxed()
    }

    fn list_recent(&self, limit: u32) -> BoxFuture<'_, Result<Vec<Message>, GatewayError>> {
        async move { Ok(self.newest(limit).await) }.boxed()
    }
}
