//! Shared application state for the mock hero API.
//!
//! [`AppState`] holds the hero collection the REST endpoints serve and a
//! log of every request that reached the API. Both live in memory only;
//! nothing survives a restart.

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Uri};
use heroes_types::{Hero, HeroId};
use tokio::sync::RwLock;

use crate::seed::seed_heroes;

/// Identity given to the first hero created in an empty store.
pub const FIRST_HERO_ID: u32 = 11;

/// One request observed by the API, as it arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method (e.g. `GET`, `DELETE`).
    pub method: String,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// `Content-Type` header value, if one was sent.
    pub content_type: Option<String>,
}

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
/// The request log is kept by default; long-running servers turn it off
/// with [`AppState::without_request_log`] so it cannot grow unbounded.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The hero collection in insertion order.
    pub heroes: Arc<RwLock<Vec<Hero>>>,
    /// Every request received, oldest first.
    pub requests: Arc<RwLock<Vec<RecordedRequest>>>,
    /// Whether [`AppState::record`] appends to `requests`.
    pub record_requests: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_heroes(Vec::new())
    }
}

impl AppState {
    /// Create a state with an empty hero collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state holding the given heroes, in order.
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Arc::new(RwLock::new(heroes)),
            requests: Arc::default(),
            record_requests: true,
        }
    }

    /// Stop keeping a request log.
    #[must_use]
    pub fn without_request_log(mut self) -> Self {
        self.record_requests = false;
        self
    }

    /// Create a state holding the default starting roster.
    pub fn seeded() -> Self {
        Self::with_heroes(seed_heroes())
    }

    /// Snapshot of the hero collection.
    pub async fn heroes(&self) -> Vec<Hero> {
        self.heroes.read().await.clone()
    }

    /// Look up a single hero by id.
    pub async fn hero(&self, id: HeroId) -> Option<Hero> {
        self.heroes.read().await.iter().find(|h| h.id == id).cloned()
    }

    /// Append a request to the request log, if the log is enabled.
    pub async fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap) {
        if !self.record_requests {
            return;
        }
        self.requests.write().await.push(RecordedRequest {
            method: method.as_str().to_owned(),
            path: uri.path().to_owned(),
            query: uri.query().map(ToOwned::to_owned),
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(ToOwned::to_owned),
        });
    }

    /// Snapshot of the request log.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    /// Number of requests received so far.
    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

/// The id a newly created hero receives, given the current collection.
///
/// One past the highest id in use, or [`FIRST_HERO_ID`] for an empty
/// collection. Returns `None` when the id space is exhausted.
pub fn next_hero_id(heroes: &[Hero]) -> Option<HeroId> {
    heroes
        .iter()
        .map(|h| h.id.into_inner())
        .max()
        .map_or(Some(FIRST_HERO_ID), |max| max.checked_add(1))
        .map(HeroId)
}
