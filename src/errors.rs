// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for inventory generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort an inventory run
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The device source could not return records
    #[error("Device source error: {0}")]
    SourceFetch(String),

    /// The template could not be located, parsed or rendered
    #[error("Template error: {0}")]
    Template(String),

    /// The rendered inventory could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

impl From<handlebars::TemplateError> for InventoryError {
    fn from(err: handlebars::TemplateError) -> Self {
        InventoryError::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for InventoryError {
    fn from(err: handlebars::RenderError) -> Self {
        InventoryError::Template(err.to_string())
    }
}
