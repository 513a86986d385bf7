// src/server/handlers/recipes.rs
//! Recipe CRUD and tag search handlers

use crate::recipe::Recipe;
use crate::server::SharedState;
use crate::{Error, Result};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::warn;

/// Path segment of the search route, which doubles as a recipe id
pub const SEARCH_SEGMENT: &str = "search";

/// Response body for delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: String,
}

/// Decode a request body into a recipe
///
/// The body is decoded regardless of `Content-Type`. Decode failures are
/// counted and surface as 400 with the decoder's message.
fn parse_recipe(state: &SharedState, body: &[u8]) -> Result<Recipe> {
    Recipe::from_json_slice(body).map_err(|e| {
        warn!("Rejected recipe body: {}", e);
        state.metrics.record_malformed();
        Error::MalformedInput(e)
    })
}

/// GET /recipes
pub async fn list_recipes(State(state): State<SharedState>) -> Json<Vec<Recipe>> {
    state.metrics.record_list();
    Json(state.store.list())
}

/// POST /recipes
///
/// Returns 201 with the stored recipe. Client-supplied `id` and
/// `publishedAt` are replaced by server values.
pub async fn create_recipe(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Recipe>)> {
    let recipe = parse_recipe(&state, &body)?;
    let created = state.store.create(recipe);
    state.metrics.record_create();
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /recipes/:id
///
/// Replaces the matching recipe with the body as parsed and echoes the body.
/// An unknown id still answers 200 with the echo and stores nothing.
pub async fn update_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Recipe>> {
    update(&state, &id, &body)
}

/// PUT /recipes/search
///
/// The literal `search` segment shadows `/recipes/:id`, so a recipe whose id
/// is `search` is updated through this route.
pub async fn update_search_recipe(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Recipe>> {
    update(&state, SEARCH_SEGMENT, &body)
}

/// DELETE /recipes/:id
///
/// Always answers 200 with the requested id, whether or not a recipe was
/// removed.
pub async fn delete_recipe(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Json<DeleteResponse> {
    delete(&state, id)
}

/// DELETE /recipes/search
pub async fn delete_search_recipe(State(state): State<SharedState>) -> Json<DeleteResponse> {
    delete(&state, SEARCH_SEGMENT.to_string())
}

fn update(state: &SharedState, id: &str, body: &[u8]) -> Result<Json<Recipe>> {
    let recipe = parse_recipe(state, body)?;
    let (recipe, replaced) = state.store.update(id, recipe);
    state.metrics.record_update(replaced);
    Ok(Json(recipe))
}

fn delete(state: &SharedState, id: String) -> Json<DeleteResponse> {
    let removed = state.store.delete(&id);
    state.metrics.record_delete(removed);
    Json(DeleteResponse { id })
}

/// GET /recipes/search?tag=X
///
/// Only the first `tag` pair counts; repeats and unrelated keys are ignored.
/// A missing `tag` searches for the empty tag.
pub async fn search_recipes(
    State(state): State<SharedState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Recipe>> {
    state.metrics.record_search();
    let tag = params
        .into_iter()
        .find_map(|(key, value)| (key == "tag").then_some(value))
        .unwrap_or_default();
    Json(state.store.search_by_tag(&tag))
}
