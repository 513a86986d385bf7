// src/server/routes.rs
//! Axum router configuration for the recipe server

use crate::server::SharedState;
use crate::server::handlers::recipes;
use axum::{
    Router,
    extract::State,
    routing::{get, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    let enable_cors = state.config.enable_cors;

    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        // The literal segment wins over :id for every method, so it also
        // carries PUT/DELETE for a recipe whose id is "search"
        .route(
            "/recipes/search",
            get(recipes::search_recipes)
                .put(recipes::update_search_recipe)
                .delete(recipes::delete_search_recipe),
        )
        .route(
            "/recipes/:id",
            put(recipes::update_recipe).delete(recipes::delete_recipe),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Prometheus metrics endpoint
async fn metrics(State(state): State<SharedState>) -> String {
    state.metrics.snapshot().to_prometheus(state.store.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{ServerConfig, ServerState};
    use crate::store::RecipeStore;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(ServerState::with_store(
            ServerConfig::default(),
            RecipeStore::new(),
        ))
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_reflects_requests() {
        let state = test_state();
        let app = create_router(state.clone());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/recipes")
                    .body(Body::from(r#"{"name": "Omelette"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("recipe_creates_total 1\n"));
        assert!(text.contains("recipes_stored 1\n"));
    }

    #[tokio::test]
    async fn test_search_route_is_not_captured_as_id() {
        let state = test_state();
        state
            .store
            .create(crate::recipe::Recipe::new("Cake").with_tags(["dessert"]));
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/recipes/search?tag=DESSERT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let recipes: Vec<crate::recipe::Recipe> = serde_json::from_slice(&body).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "Cake");
    }

    #[tokio::test]
    async fn test_cors_header_when_enabled() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/recipes")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_no_cors_header_when_disabled() {
        let config = ServerConfig {
            enable_cors: false,
            ..Default::default()
        };
        let state = Arc::new(ServerState::with_store(config, RecipeStore::new()));
        let app = create_router(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/recipes")
                    .header("origin", "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.headers().get("access-control-allow-origin").is_none());
    }
}
