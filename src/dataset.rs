//! # Dataset Import Module
//!
//! ## Purpose
//! One-shot CSV import that populates the store at startup. Rows are mapped
//! into catalog records with sequential ids, lowercased names and type tags,
//! and derived image URLs.
//!
//! ## Input/Output Specification
//! - **Input**: CSV file with `Name`, `Type1`, and optional `Type2` columns
//! - **Output**: Store populated with at most `max_records` records
//! - **Failure**: Logged and swallowed; the service keeps serving whatever
//!   the store already held (empty on first load)
//!
//! ## Key Features
//! - Runs as a background task so the API is reachable immediately; early
//!   requests observe an empty store until the load finishes
//! - Row cap matches the canonical 721-entry dataset and is configurable
//! - Ids are assigned 1-based in file order

use crate::config::DatasetConfig;
use crate::errors::{CatalogError, Result};
use crate::store::PokemonStore;
use crate::utils::Timer;
use crate::Pokemon;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// One row of the source file. Columns beyond these are ignored.
#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type1")]
    type1: String,
    #[serde(rename = "Type2", default)]
    type2: Option<String>,
}

impl DatasetRow {
    /// Build the stored record for this row. The second type tag is kept
    /// only when the source column is non-empty.
    fn into_pokemon(self, id: u32, image_base_url: &str) -> Pokemon {
        let mut types = vec![self.type1.to_lowercase()];
        if let Some(type2) = self.type2.filter(|t| !t.is_empty()) {
            types.push(type2.to_lowercase());
        }

        Pokemon {
            id,
            name: self.name.to_lowercase(),
            types,
            url: format!("{}/images/{}.png", image_base_url, id),
        }
    }
}

/// Read the dataset file into records, capped at `max_records` rows
pub fn load_from_csv<P: AsRef<Path>>(
    path: P,
    max_records: usize,
    image_base_url: &str,
) -> Result<Vec<Pokemon>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| CatalogError::DataLoad {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    let mut records = Vec::new();
    for row in reader.deserialize::<DatasetRow>() {
        if records.len() >= max_records {
            break;
        }
        let row = row.map_err(|e| CatalogError::DataLoad {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        let id = records.len() as u32 + 1;
        records.push(row.into_pokemon(id, image_base_url));
    }

    Ok(records)
}

/// Background load task: read the configured dataset into the store and
/// mark it ready on success. Failure is logged and the store is left as it
/// was; the service never exits because of a load failure.
pub async fn load_into(store: Arc<PokemonStore>, config: DatasetConfig) {
    let timer = Timer::new("dataset_load");

    let loaded = tokio::task::spawn_blocking(move || {
        load_from_csv(&config.csv_path, config.max_records, &config.image_base_url)
    })
    .await;

    match loaded {
        Ok(Ok(records)) => {
            let count = records.len();
            store.replace_all(records);
            store.mark_ready();
            info!("Pokemon data loaded successfully: {} records in {}ms", count, timer.elapsed_ms());
        }
        Ok(Err(e)) => {
            error!("Error loading Pokemon data: {}", e);
        }
        Err(e) => {
            error!("Dataset load task failed: {}", e);
        }
    }
}
