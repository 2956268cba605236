//! REST API endpoint handlers for the mock hero API.
//!
//! All handlers operate on the in-memory hero collection in [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/heroes` | List heroes (filter by `?id=` or `?name=`) |
//! | `GET` | `/api/heroes/{id}` | Get single hero, 404 if absent |
//! | `POST` | `/api/heroes` | Create a hero, store assigns the id |
//! | `PUT` | `/api/heroes` | Replace a hero keyed by its embedded id |
//! | `DELETE` | `/api/heroes/{id}` | Remove a hero |

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use heroes_types::{Hero, HeroId, NewHero};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{next_hero_id, AppState};

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/heroes` endpoint.
#[derive(Debug, Default, serde::Deserialize)]
pub struct HeroQuery {
    /// Exact id match. Yields zero or one heroes.
    pub id: Option<u32>,
    /// Case-insensitive name substring match.
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/heroes -- list or filter heroes
// ---------------------------------------------------------------------------

/// List heroes in store order, optionally filtered.
///
/// An unmatched `id` is not an error: it yields an empty array.
pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HeroQuery>,
) -> Json<Vec<Hero>> {
    let heroes = state.heroes.read().await;

    let matches: Vec<Hero> = heroes
        .iter()
        .filter(|hero| params.id.is_none_or(|id| hero.id == HeroId(id)))
        .filter(|hero| {
            params
                .name
                .as_deref()
                .is_none_or(|term| name_matches(&hero.name, term))
        })
        .cloned()
        .collect();

    debug!(
        id = ?params.id,
        name = ?params.name,
        count = matches.len(),
        "listed heroes"
    );

    Json(matches)
}

/// Case-insensitive substring test used by name searches.
fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

// ---------------------------------------------------------------------------
// GET /api/heroes/{id} -- single hero
// ---------------------------------------------------------------------------

/// Return a single hero, or 404 when the id is unknown.
pub async fn get_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, ApiError> {
    state
        .hero(HeroId(id))
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("hero {id}")))
}

// ---------------------------------------------------------------------------
// POST /api/heroes -- create
// ---------------------------------------------------------------------------

/// Store a new hero and return it with its assigned id.
pub async fn create_hero(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewHero>,
) -> Result<impl IntoResponse, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::InvalidBody(
            "hero name must not be empty".to_owned(),
        ));
    }

    let mut heroes = state.heroes.write().await;
    let id = next_hero_id(&heroes)
        .ok_or_else(|| ApiError::Internal("hero id space exhausted".to_owned()))?;

    let hero = Hero::new(id, body.name);
    heroes.push(hero.clone());
    info!(id = %hero.id, name = %hero.name, "hero created");

    Ok((StatusCode::CREATED, Json(hero)))
}

// ---------------------------------------------------------------------------
// PUT /api/heroes -- replace
// ---------------------------------------------------------------------------

/// Replace the stored hero that has the same id as the body.
pub async fn update_hero(
    State(state): State<Arc<AppState>>,
    Json(hero): Json<Hero>,
) -> Result<StatusCode, ApiError> {
    if hero.name.trim().is_empty() {
        return Err(ApiError::InvalidBody(
            "hero name must not be empty".to_owned(),
        ));
    }

    let mut heroes = state.heroes.write().await;
    let slot = heroes
        .iter_mut()
        .find(|h| h.id == hero.id)
        .ok_or_else(|| ApiError::NotFound(format!("hero {}", hero.id)))?;

    info!(id = %hero.id, name = %hero.name, "hero updated");
    *slot = hero;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// DELETE /api/heroes/{id} -- remove
// ---------------------------------------------------------------------------

/// Remove a hero. Deleting an unknown id still succeeds.
pub async fn delete_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> StatusCode {
    let mut heroes = state.heroes.write().await;
    let before = heroes.len();
    heroes.retain(|h| h.id != HeroId(id));
    let removed = heroes.len() != before;

    info!(id, removed, "hero deleted");

    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_ignores_case() {
        assert!(name_matches("Superman", "man"));
        assert!(name_matches("RubberMan", "man"));
        assert!(name_matches("Magma", "MAG"));
        assert!(!name_matches("Narco", "man"));
    }
}
