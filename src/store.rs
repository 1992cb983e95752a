//! # Store Management Module
//!
//! ## Purpose
//! Holds the process-wide collection of Pokémon records: the dataset loaded
//! at startup plus any records appended through the insert endpoint. The
//! store is the only source of truth and lives exactly as long as the
//! process; there is no persistence.
//!
//! ## Input/Output Specification
//! - **Input**: Loaded dataset records, validated insert candidates
//! - **Output**: Point-in-time snapshots for the query engine
//! - **Ordering**: Load order first, then append order
//!
//! ## Key Features
//! - Read-write lock around the record list; handlers run on a
//!   multi-threaded runtime, and the duplicate check plus append must not
//!   interleave between two inserts
//! - Readiness flag the API layer can report while the background load runs
//! - No indices; every query is a linear scan over a bounded dataset

use crate::errors::Result;
use crate::validation::{self, NewPokemon};
use crate::Pokemon;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory Pokémon collection guarded by a read-write lock
#[derive(Debug, Default)]
pub struct PokemonStore {
    entries: RwLock<Vec<Pokemon>>,
    ready: AtomicBool,
}

impl PokemonStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records, marked ready
    pub fn with_entries(entries: Vec<Pokemon>) -> Self {
        Self {
            entries: RwLock::new(entries),
            ready: AtomicBool::new(true),
        }
    }

    /// Replace the full contents with freshly loaded dataset records
    pub fn replace_all(&self, entries: Vec<Pokemon>) {
        *self.entries.write() = entries;
    }

    /// Clone the current contents for a pure query pass
    pub fn snapshot(&self) -> Vec<Pokemon> {
        self.entries.read().clone()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Mark the startup load as finished
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether the startup load has finished
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Validate a candidate and append it.
    ///
    /// Validation and append happen under a single write guard so the
    /// uniqueness check cannot race another insert. On any rejection the
    /// contents are untouched.
    pub fn insert(&self, candidate: NewPokemon) -> Result<Pokemon> {
        let mut entries = self.entries.write();
        let pokemon = validation::validate(&entries, candidate)?;
        entries.push(pokemon.clone());
        Ok(pokemon)
    }
}
