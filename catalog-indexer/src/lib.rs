//! # Catalog Indexer
//!
//! Generates the HealthForge wellness catalog and publishes it to an Algolia
//! search index.
//!
//! ## Architecture
//!
//! A run follows the Assembler-Dump-Publisher pattern:
//!
//! 1. **Assembler**: Builds every template into a record, in catalog order
//! 2. **Dump**: Writes the catalog to a local JSON file
//! 3. **Publisher**: Uploads the catalog in batches, then applies index settings
//! 4. **Orchestrator**: Runs the three steps in sequence
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`templates`]: Built-in category templates
//! - [`processor`]: Turns templates into records
//! - [`assembler`]: Orders records and assigns sequence indices
//! - [`dump`]: Local JSON dump
//! - [`publisher`]: Batched upload and index settings
//! - [`orchestrator`]: Coordinates a run
//! - [`errors`]: Error types for a run

pub mod assembler;
pub mod config;
pub mod dump;
pub mod errors;
pub mod orchestrator;
pub mod processor;
pub mod publisher;
pub mod templates;

pub use config::{Dependencies, IndexerConfig};
pub use errors::CatalogError;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Catalog run error.
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
