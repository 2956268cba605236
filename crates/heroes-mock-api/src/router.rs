//! Axum router construction for the mock hero API.
//!
//! Assembles all routes into a single [`Router`] with request recording,
//! tracing, and CORS middleware.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the mock hero API.
///
/// The router includes:
/// - `GET /api/heroes` -- list heroes (also `?id=` and `?name=` filters)
/// - `POST /api/heroes` -- create a hero
/// - `PUT /api/heroes` -- replace a hero
/// - `GET /api/heroes/{id}` -- single hero
/// - `DELETE /api/heroes/{id}` -- remove a hero
///
/// The collection routes are also reachable with a trailing slash, which
/// is how query-style lookups (`api/heroes/?id=11`) address them.
///
/// CORS is configured to allow any origin so a browser frontend served
/// from elsewhere can reach the store.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let collection = get(handlers::list_heroes)
        .post(handlers::create_hero)
        .put(handlers::update_hero);

    Router::new()
        .route("/api/heroes", collection.clone())
        .route("/api/heroes/", collection)
        .route(
            "/api/heroes/{id}",
            get(handlers::get_hero).delete(handlers::delete_hero),
        )
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            record_request,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Append every incoming request to the state's request log.
async fn record_request(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state
        .record(request.method(), request.uri(), request.headers())
        .await;
    next.run(request).await
}
