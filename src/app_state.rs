//! Shared application state injected into all Axum handlers.

use crate::error::GatewayError;
use crate::persistence::SharedStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// Built once before the listener starts and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Message store; `None` while running in degraded mode.
    pub store: Option<SharedStore>,
}

impl AppState {
    /// Creates state around an optional store.
    #[must_use]
    pub fn new(store: Option<SharedStore>) -> Self {
        Self { store }
    }

    /// Returns the store, or [`GatewayError::DbNotConnected`] in degraded
    /// mode.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::DbNotConnected`] if no store was configured.
    pub fn store(&self) -> Result<&SharedStore, GatewayError> {
        self.store.as_ref().ok_or(GatewayError::DbNotConnected)
    }
}
