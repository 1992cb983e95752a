//! # Insert Validation Module
//!
//! ## Purpose
//! Validates insert candidates before they reach the store, ensuring every
//! stored record keeps the catalog invariants: complete fields, one or two
//! known type tags, and a unique id and name.
//!
//! ## Input/Output Specification
//! - **Input**: `NewPokemon` candidate from the insert endpoint, plus the
//!   current store contents for uniqueness checks
//! - **Output**: A normalized `Pokemon` ready to append, or the first
//!   failing check's error
//! - **Validation Rules**: Presence, cardinality, vocabulary membership,
//!   then uniqueness; checks run in that order and the first failure wins
//!
//! ## Key Features
//! - All checks run before any mutation; a rejected candidate never leaves
//!   a partial record behind
//! - Name and tags are lowercased on acceptance so store comparisons stay
//!   case-insensitive

use crate::errors::{CatalogError, Result};
use crate::{Pokemon, PokemonId, POKEMON_TYPES};
use serde::Deserialize;

/// Insert candidate as it arrives on the wire. Every field is optional at
/// this layer; presence is the first validation rule, not a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPokemon {
    pub id: Option<PokemonId>,
    pub name: Option<String>,
    pub types: Option<Vec<String>>,
    pub url: Option<String>,
}

/// Check whether a tag belongs to the fixed type vocabulary
pub fn is_known_type(tag: &str) -> bool {
    let tag = tag.to_lowercase();
    POKEMON_TYPES.iter().any(|known| *known == tag)
}

/// Validate a candidate against the current records and normalize it.
///
/// An id of zero and empty name/url strings count as missing. An empty
/// `types` array is present but fails the cardinality rule.
pub fn validate(existing: &[Pokemon], candidate: NewPokemon) -> Result<Pokemon> {
    let id = match candidate.id {
        Some(id) if id > 0 => id,
        _ => return Err(CatalogError::MissingField),
    };
    let name = match candidate.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CatalogError::MissingField),
    };
    let types = candidate.types.ok_or(CatalogError::MissingField)?;
    let url = match candidate.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(CatalogError::MissingField),
    };

    if types.is_empty() || types.len() > 2 {
        return Err(CatalogError::InvalidCardinality);
    }

    if !types.iter().all(|tag| is_known_type(tag)) {
        return Err(CatalogError::InvalidType);
    }

    let name = name.to_lowercase();
    if existing.iter().any(|p| p.id == id || p.name == name) {
        return Err(CatalogError::DuplicateEntity);
    }

    Ok(Pokemon {
        id,
        name,
        types: types.iter().map(|tag| tag.to_lowercase()).collect(),
        url,
    })
}
