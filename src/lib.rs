// src/lib.rs

//! Recipe Store
//!
//! A small HTTP service that keeps recipe records in memory and answers
//! list, create, update, delete and tag-search requests over JSON.
//!
//! # Architecture
//!
//! - `recipe`: the record type and its JSON shape
//! - `store`: `RecipeStore`, the lock-protected, list-backed repository
//! - `server`: axum routes and handlers over a shared `ServerState`
//!
//! State lives only in memory. The collection may be seeded once from a
//! JSON file at startup; mutations are never written back.

mod error;
pub mod recipe;
pub mod server;
pub mod store;

pub use error::{Error, Result};
pub use recipe::Recipe;
pub use server::{ServerConfig, ServerState, ServiceConfig, create_router, run_server};
pub use store::RecipeStore;
