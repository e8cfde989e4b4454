//! # echo-gateway
//!
//! Minimal HTTP service with a plain-text greeting, a JSON echo, and an
//! append-only PostgreSQL message log.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │     ├── GET  /          greeting
//!     │     ├── POST /echo      echo + textual length (domain/)
//!     │     ├── POST /save      ┐
//!     │     └── GET  /messages  ┘ via AppState.store
//!     │
//!     ├── MessageStore (persistence/)
//!     │
//!     └── PostgreSQL (optional; absent → degraded mode)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
