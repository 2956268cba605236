//! Mock hero API entry point.
//!
//! Serves an in-memory hero collection at `/api/heroes` so the
//! data-access client and a browser frontend have something to talk to.
//! State lives only as long as the process.

use std::sync::Arc;

use heroes_mock_api::{start_server, AppState, MockApiConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// builds the store, then serves requests until terminated.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("heroes-mock-api starting");

    let config = MockApiConfig::from_env()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        seed = config.seed,
        record_requests = config.record_requests,
        "configuration loaded"
    );

    let mut state = if config.seed {
        AppState::seeded()
    } else {
        AppState::new()
    };
    if !config.record_requests {
        state = state.without_request_log();
    }

    start_server(&config.server, Arc::new(state)).await?;

    Ok(())
}
