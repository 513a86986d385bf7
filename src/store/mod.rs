// src/store/mod.rs
//! In-memory recipe repository
//!
//! `RecipeStore` owns the ordered recipe collection for the lifetime of the
//! server. Mutations (create/update/delete) hold the write lock for the whole
//! scan-and-mutate; list and search take the read lock and hand back owned
//! snapshots, so no guard ever escapes a call.
//!
//! Order is insertion order. Deleting shifts later records down, so positions
//! are not stable across deletes.

mod loader;

pub use loader::{DEFAULT_DATA_FILE, load_recipes};

use crate::recipe::Recipe;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Thread-safe, list-backed recipe collection
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `recipes`, kept in the given order
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Number of stored recipes
    pub fn len(&self) -> usize {
        self.recipes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.read().is_empty()
    }

    /// Snapshot of every recipe in current order
    pub fn list(&self) -> Vec<Recipe> {
        self.recipes.read().clone()
    }

    /// Store a new recipe and return it as stored
    ///
    /// Any `id` or `published_at` on the input is overwritten: the id is a
    /// fresh UUIDv7 (time-ordered, unique within the process) and the
    /// timestamp is the current time.
    pub fn create(&self, mut recipe: Recipe) -> Recipe {
        recipe.id = Uuid::now_v7().to_string();
        recipe.published_at = Utc::now();

        self.recipes.write().push(recipe.clone());
        info!("Created recipe {} ({})", recipe.id, recipe.name);
        recipe
    }

    /// Replace the first recipe whose id equals `id` with `recipe`
    ///
    /// The replacement is stored exactly as given. The path id is not forced
    /// onto it, so a payload carrying a different id renames the record.
    /// Returns the payload together with whether a record was replaced; a miss
    /// leaves the collection untouched.
    pub fn update(&self, id: &str, recipe: Recipe) -> (Recipe, bool) {
        let mut recipes = self.recipes.write();
        let Some(slot) = recipes.iter_mut().find(|r| r.id == id) else {
            debug!("Update for unknown recipe {} left store unchanged", id);
            return (recipe, false);
        };
        *slot = recipe.clone();
        info!("Updated recipe {}", id);
        (recipe, true)
    }

    /// Remove the first recipe whose id equals `id`
    ///
    /// Returns whether a record was removed. Remaining records keep their
    /// relative order.
    pub fn delete(&self, id: &str) -> bool {
        let mut recipes = self.recipes.write();
        match recipes.iter().position(|r| r.id == id) {
            Some(index) => {
                recipes.remove(index);
                info!("Deleted recipe {}", id);
                true
            }
            None => {
                debug!("Delete for unknown recipe {} left store unchanged", id);
                false
            }
        }
    }

    /// Recipes carrying `tag` (case-insensitive whole-tag match), in order
    ///
    /// An empty `tag` is not a wildcard: it matches only recipes that have a
    /// literal empty-string tag.
    pub fn search_by_tag(&self, tag: &str) -> Vec<Recipe> {
        self.recipes
            .read()
            .iter()
            .filter(|r| r.has_tag(tag))
            .cloned()
            .collect()
    }
}
