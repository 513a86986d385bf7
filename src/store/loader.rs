// src/store/loader.rs
//! One-time seed load of recipes from a JSON file
//!
//! The seed file holds a JSON array of recipes. A missing or unreadable file,
//! or content that is not a recipe array, yields an empty collection; startup
//! never fails because of it. Nothing is written back.

use crate::recipe::Recipe;
use std::path::Path;
use tracing::{info, warn};

/// Seed file read from the working directory when no other path is configured
pub const DEFAULT_DATA_FILE: &str = "recipes.json";

/// Load the seed recipes from `path`, falling back to an empty list
pub fn load_recipes(path: &Path) -> Vec<Recipe> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("No seed file at {}, starting empty", path.display());
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read seed file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let parsed: serde_json::Result<Vec<Recipe>> =
        serde_json::from_slice::<Vec<serde_json::Value>>(&data)
            .and_then(|values| values.into_iter().map(Recipe::from_json_value).collect());

    match parsed {
        Ok(recipes) => {
            info!("Loaded {} recipes from {}", recipes.len(), path.display());
            recipes
        }
        Err(e) => {
            warn!("Ignoring malformed seed file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
