//! Error types for a catalog run.

use thiserror::Error;

/// Errors that can occur while dumping or publishing the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Writing the local dump failed.
    #[error("Dump error: {0}")]
    DumpError(String),

    /// The search service rejected a batch or the settings update.
    #[error("Publish error: {0}")]
    PublishError(String),
}

impl CatalogError {
    /// Create a dump error.
    pub fn dump(msg: impl Into<String>) -> Self {
        Self::DumpError(msg.into())
    }

    /// Create a publish error.
    pub fn publish(msg: impl Into<String>) -> Self {
        Self::PublishError(msg.into())
    }
}

