//! # Pokédex Catalog Server Driver
//!
//! ## Purpose
//! Main entry point for the catalog server. Loads configuration, starts the
//! background dataset import, and serves the HTTP API.
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Spawn the background dataset load into the store
//! 4. Start the web API server (reachable before the load completes)
//! 5. Handle shutdown signals gracefully

use clap::{Arg, Command};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use pokedex_catalog::{
    api::ApiServer,
    config::Config,
    dataset,
    errors::{CatalogError, Result},
    AppState, PokemonStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("pokedex-server")
        .version("0.1.0")
        .author("Pokedex API Team")
        .about("In-memory Pokémon catalog service with filtering, pagination, and neighbor lookup")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Server port")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("dataset")
                .short('d')
                .long("dataset")
                .value_name("FILE")
                .help("CSV dataset path"),
        )
        .get_matches();

    // Load configuration
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.toml");
    let mut config = Config::from_file(config_path)?;

    // Apply command line overrides
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }
    if let Some(dataset_path) = matches.get_one::<String>("dataset") {
        config.dataset.csv_path = dataset_path.into();
    }

    let config = Arc::new(config);

    // Initialize logging
    init_logging(&config)?;

    info!("Starting Pokédex Catalog Service v0.1.0");
    info!("Configuration loaded from: {}", config_path);

    // The store starts empty; the dataset import runs in the background so
    // the API is reachable immediately. Requests racing the load observe an
    // empty catalog, and /health reports when the load has finished.
    let store = Arc::new(PokemonStore::new());
    let app_state = AppState {
        config: config.clone(),
        store: store.clone(),
    };

    tokio::spawn(dataset::load_into(store, config.dataset.clone()));

    // Start the API server
    let server = ApiServer::new(app_state);
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            error!("Server error: {}", e);
        }
    });

    info!(
        "Pokédex Catalog Service listening on {}:{}",
        config.server.host, config.server.port
    );

    // Wait for shutdown signal
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = server_handle => {
            warn!("Server stopped unexpectedly");
        }
    }

    info!("Pokédex Catalog Service shut down successfully");

    Ok(())
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> Result<()> {
    let log_level: tracing::Level =
        config.logging.level.parse().map_err(|_| CatalogError::Config {
            message: format!("Invalid log level: {}", config.logging.level),
        })?;
    let filter = tracing_subscriber::filter::LevelFilter::from_level(log_level);

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true).with_level(true);
    let fmt_layer = if config.logging.json_format {
        fmt_layer.json().with_filter(filter).boxed()
    } else {
        fmt_layer.with_filter(filter).boxed()
    };

    tracing_subscriber::registry().with(fmt_layer).init();

    info!("Logging initialized with level: {}", config.logging.level);
    Ok(())
}
