//! Mock hero API startup helper for embedding in another process.
//!
//! Provides [`spawn_mock_api`] which launches the server on a background
//! Tokio task. Integration tests and demos use it to stand up a store on a
//! free loopback port and point the data-access client at it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use heroes_mock_api::{spawn_mock_api, AppState, ServerConfig};
//! use std::sync::Arc;
//!
//! let config = ServerConfig { host: "127.0.0.1".into(), port: 0 };
//! let (addr, handle) = spawn_mock_api(&config, Arc::new(AppState::seeded())).await?;
//! // The server is now listening on `addr`.
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::server::{bind, serve, ServerConfig, ServerError};
use crate::state::AppState;

/// Errors that can occur when spawning the mock hero API.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// The server failed to bind or start.
    #[error("server start error: {0}")]
    Server(#[from] ServerError),
}

/// Spawn the mock hero API on a background Tokio task.
///
/// The listener is bound before this function returns, so the returned
/// address is immediately connectable, including when `config.port` is 0.
/// The server runs until the Tokio runtime shuts down or the returned
/// handle is aborted.
///
/// # Errors
///
/// Returns [`StartupError::Server`] if the server cannot bind to the
/// requested address.
pub async fn spawn_mock_api(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<(SocketAddr, JoinHandle<()>), StartupError> {
    let listener = bind(config).await?;
    let addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("no local address: {e}")))?;

    let handle = tokio::spawn(async move {
        if let Err(e) = serve(listener, state).await {
            tracing::error!(error = %e, "mock hero API exited with error");
        }
    });

    tracing::info!(%addr, "mock hero API spawned on background task");

    Ok((addr, handle))
}
