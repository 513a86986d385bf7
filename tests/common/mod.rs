// tests/common/mod.rs

//! Shared helpers for driving the recipe router in integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use recipe_store::server::{ServerConfig, ServerState, SharedState};
use recipe_store::{Recipe, RecipeStore, create_router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Build fresh state and a router over an empty store.
///
/// Returns (state, router) so tests can inspect the store directly.
pub fn setup_app() -> (SharedState, Router) {
    setup_app_with(RecipeStore::new())
}

/// Build state and a router over the given store.
pub fn setup_app_with(store: RecipeStore) -> (SharedState, Router) {
    let state = Arc::new(ServerState::with_store(ServerConfig::default(), store));
    let app = create_router(state.clone());
    (state, app)
}

/// Send one request and return (status, raw body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let body = match body {
        Some(text) => Body::from(text.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Send one request and decode the body as JSON.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// POST a recipe payload and decode the stored recipe.
pub async fn create(app: &Router, payload: &str) -> Recipe {
    let (status, bytes) = send(app, Method::POST, "/recipes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_slice(&bytes).unwrap()
}

/// GET /recipes decoded into recipes.
pub async fn list(app: &Router) -> Vec<Recipe> {
    let (status, bytes) = send(app, Method::GET, "/recipes", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

/// GET /recipes/search decoded into recipes.
pub async fn search(app: &Router, query: &str) -> Vec<Recipe> {
    let uri = format!("/recipes/search{}", query);
    let (status, bytes) = send(app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}
