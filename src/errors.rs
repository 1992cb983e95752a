//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the catalog service, providing the error
//! taxonomy shared by the validation, dataset, and API layers.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from various system components
//! - **Output**: Structured error types with context and error chains
//! - **Error Categories**: Validation, Lookup, Dataset, Configuration, System
//!
//! ## Key Features
//! - One variant per rejection the insert endpoint can produce
//! - Display strings double as the client-facing API messages
//! - Automatic conversion from io/csv/toml errors
//! - Structured logging integration

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error taxonomy for the catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required insert field is absent or empty
    #[error("Missing required data.")]
    MissingField,

    /// An insert candidate carried zero or more than two type tags
    #[error("Pokémon can only have one or two types.")]
    InvalidCardinality,

    /// An insert candidate carried a tag outside the known vocabulary
    #[error("Pokémon's type is invalid.")]
    InvalidType,

    /// An insert candidate collided with an existing id or name
    #[error("The Pokémon already exists.")]
    DuplicateEntity,

    /// Lookup target outside the store's id range
    #[error("Not found")]
    NotFound,

    /// Dataset import failure; logged, never surfaced to clients
    #[error("Failed to load dataset from {path}: {details}")]
    DataLoad { path: String, details: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CatalogError {
    /// Whether this error is a client-side validation rejection (HTTP 400)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::MissingField
                | CatalogError::InvalidCardinality
                | CatalogError::InvalidType
                | CatalogError::DuplicateEntity
        )
    }

    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            CatalogError::MissingField
            | CatalogError::InvalidCardinality
            | CatalogError::InvalidType
            | CatalogError::DuplicateEntity => "validation",
            CatalogError::NotFound => "lookup",
            CatalogError::DataLoad { .. } | CatalogError::Csv(_) => "dataset",
            CatalogError::Config { .. } | CatalogError::Toml(_) => "configuration",
            CatalogError::Io(_) | CatalogError::Internal { .. } => "system",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_flagged() {
        assert!(CatalogError::MissingField.is_validation());
        assert!(CatalogError::DuplicateEntity.is_validation());
        assert!(!CatalogError::NotFound.is_validation());
    }

    #[test]
    fn display_matches_api_messages() {
        assert_eq!(CatalogError::MissingField.to_string(), "Missing required data.");
        assert_eq!(CatalogError::NotFound.to_string(), "Not found");
        assert_eq!(
            CatalogError::DuplicateEntity.to_string(),
            "The Pokémon already exists."
        );
    }
}
