//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration for the catalog service: server binding, dataset
//! import settings, and logging, loaded from a TOML file with environment
//! variable overrides and validation.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration file (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Command line arguments (highest priority, applied in `main`)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use pokedex_catalog::config::Config;
//!
//! let config = Config::from_file("config.toml").unwrap();
//! println!("Server port: {}", config.server.port);
//! ```

use crate::errors::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server and API configuration
    pub server: ServerConfig,
    /// Dataset import settings
    pub dataset: DatasetConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable CORS for browser frontends
    pub enable_cors: bool,
}

/// Dataset import configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the CSV dataset consumed once at startup
    pub csv_path: PathBuf,
    /// Directory served under `/images`
    pub images_dir: PathBuf,
    /// Row cap applied to the dataset (the canonical file has 721 entries)
    pub max_records: usize,
    /// Base URL prefix for derived image links
    pub image_base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/pokemon.csv"),
            images_dir: PathBuf::from("images"),
            max_records: 721,
            image_base_url: "https://pkm-api.onrender.com".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| CatalogError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("POKEDEX_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("POKEDEX_PORT") {
            self.server.port = port.parse().map_err(|_| CatalogError::Config {
                message: "Invalid port number in POKEDEX_PORT".to_string(),
            })?;
        }
        if let Ok(csv_path) = std::env::var("POKEDEX_DATASET_PATH") {
            self.dataset.csv_path = PathBuf::from(csv_path);
        }
        if let Ok(images_dir) = std::env::var("POKEDEX_IMAGES_DIR") {
            self.dataset.images_dir = PathBuf::from(images_dir);
        }
        if let Ok(level) = std::env::var("POKEDEX_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(CatalogError::Config {
                message: "server.port cannot be zero".to_string(),
            });
        }

        if self.dataset.max_records == 0 {
            return Err(CatalogError::Config {
                message: "dataset.max_records must be greater than zero".to_string(),
            });
        }

        if self.dataset.image_base_url.is_empty() {
            return Err(CatalogError::Config {
                message: "dataset.image_base_url cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
