//! Integration tests for the mock hero API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use heroes_mock_api::router::build_router;
use heroes_mock_api::state::AppState;
use heroes_types::{Hero, HeroId};
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::with_heroes(vec![
        Hero::new(11_u32, "Superman"),
        Hero::new(12_u32, "Narco"),
        Hero::new(13_u32, "Batman"),
    ]))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// Reads
// =========================================================================

#[tokio::test]
async fn test_list_heroes() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/heroes").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().map(Vec::len), Some(3));
    assert_eq!(json[0]["name"], "Superman");
    assert_eq!(json[2]["id"], 13);
}

#[tokio::test]
async fn test_search_by_name_keeps_store_order() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/heroes/?name=MAN")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(
        json,
        serde_json::json!([
            {"id": 11, "name": "Superman"},
            {"id": 13, "name": "Batman"},
        ])
    );
}

#[tokio::test]
async fn test_query_by_id_unmatched_is_empty_not_error() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/heroes/?id=99").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_query_by_id_matched() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/heroes/?id=12").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!([{"id": 12, "name": "Narco"}]));
}

#[tokio::test]
async fn test_get_hero_by_id() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/heroes/13").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], "Batman");
}

#[tokio::test]
async fn test_get_hero_not_found() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/api/heroes/404").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["error"], "hero 404");
}

// =========================================================================
// Writes
// =========================================================================

#[tokio::test]
async fn test_create_assigns_next_id() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": "Wonder Woman"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json, serde_json::json!({"id": 14, "name": "Wonder Woman"}));

    let stored = state.hero(HeroId(14)).await;
    assert_eq!(stored.map(|h| h.name).as_deref(), Some("Wonder Woman"));
}

#[tokio::test]
async fn test_create_stores_name_as_sent() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": " Wonder Woman "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["name"], " Wonder Woman ");
    let stored = state.hero(HeroId(14)).await;
    assert_eq!(stored.map(|h| h.name).as_deref(), Some(" Wonder Woman "));
}

#[tokio::test]
async fn test_create_in_empty_store_starts_at_eleven() {
    let state = Arc::new(AppState::new());
    let router = build_router(state);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": "Tornado"}),
        ))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["id"], 11);
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/heroes",
            &serde_json::json!({"name": "   "}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.heroes().await.len(), 3);
}

#[tokio::test]
async fn test_update_replaces_record() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/heroes",
            &serde_json::json!({"id": 12, "name": "Narco II"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let names: Vec<String> = state.heroes().await.into_iter().map(|h| h.name).collect();
    assert_eq!(names, vec!["Superman", "Narco II", "Batman"]);
}

#[tokio::test]
async fn test_update_unknown_hero_is_not_found() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/heroes",
            &serde_json::json!({"id": 99, "name": "Nobody"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.heroes().await.len(), 3);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(
            Request::delete("/api/heroes/12")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(state.hero(HeroId(12)).await.is_none());
    assert_eq!(state.heroes().await.len(), 2);
}

#[tokio::test]
async fn test_delete_unknown_hero_still_succeeds() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let response = router
        .oneshot(
            Request::delete("/api/heroes/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.heroes().await.len(), 3);
}

// =========================================================================
// Request log
// =========================================================================

#[tokio::test]
async fn test_requests_are_recorded() {
    let state = make_test_state();
    let router = build_router(Arc::clone(&state));

    let _ = router
        .oneshot(
            Request::get("/api/heroes/?name=man")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let requests = state.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/heroes/");
    assert_eq!(requests[0].query.as_deref(), Some("name=man"));
}
