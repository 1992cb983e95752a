//! # Pokédex Catalog Service
//!
//! ## Overview
//! This library implements a small read/write catalog service for Pokémon
//! records. A fixed CSV dataset is loaded once at startup into an in-memory
//! store, which is then served over a JSON HTTP API.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `dataset`: CSV import pipeline that populates the store at startup
//! - `store`: In-memory, lock-guarded collection of Pokémon records
//! - `query`: Pure filter, pagination, and neighbor-lookup functions
//! - `validation`: Insert-candidate validation rules
//! - `api`: REST API endpoints and static image serving
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: A tabular Pokémon dataset (CSV), HTTP requests (JSON)
//! - **Output**: JSON responses with catalog pages, neighbor triples, counts
//! - **Mutation**: Append-only inserts via `POST /pokemons`; no persistence
//!
//! ## Usage
//! ```rust,no_run
//! use pokedex_catalog::{api::ApiServer, AppState, Config, PokemonStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Arc::new(Config::from_file("config.toml")?);
//!     let store = Arc::new(PokemonStore::new());
//!     let state = AppState { config, store };
//!     ApiServer::new(state).run().await?;
//!     Ok(())
//! }
//! ```

// Core modules
pub mod api;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod query;
pub mod store;
pub mod validation;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use errors::{CatalogError, Result};
pub use store::PokemonStore;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identifier assigned to each catalog record. Loaded records are numbered
/// `1..=N` in dataset order; inserted records carry a caller-chosen id.
pub type PokemonId = u32;

/// The closed vocabulary of type tags a Pokémon may carry. Membership is
/// enforced for inserted records only; dataset rows are trusted as-is.
pub const POKEMON_TYPES: [&str; 18] = [
    "bug", "dragon", "fairy", "fire", "ghost", "ground", "normal", "psychic", "steel", "dark",
    "electric", "fighting", "flying", "grass", "ice", "poison", "rock", "water",
];

/// One catalog record.
///
/// Names and type tags are stored lowercase; `types` always holds one or two
/// tags. `url` points at the record's image resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    pub types: Vec<String>,
    pub url: String,
}

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub store: Arc<store::PokemonStore>,
}
