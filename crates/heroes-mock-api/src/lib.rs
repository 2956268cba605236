//! In-memory Hero collection served over HTTP.
//!
//! This crate provides an Axum HTTP server that stands in for the remote
//! hero resource the data-access client talks to. It follows the resource
//! addressing convention rooted at `/api/heroes`:
//!
//! - **Collection reads** (`GET /api/heroes`, optionally filtered by
//!   `?id=` or `?name=`)
//! - **Singular reads** (`GET /api/heroes/{id}`, 404 when absent)
//! - **Writes** (`POST` and `PUT` on the collection, `DELETE` on the
//!   singular path)
//!
//! # Architecture
//!
//! Heroes live in an insertion-ordered vector behind a
//! [`tokio::sync::RwLock`] inside [`AppState`]. Every API request is also
//! appended to a request log so callers can see exactly what reached the
//! store. Identity assignment, query semantics, and durability (there is
//! none) are this crate's business, not the client's.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod seed;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use config::MockApiConfig;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use startup::spawn_mock_api;
pub use state::{AppState, RecordedRequest};
