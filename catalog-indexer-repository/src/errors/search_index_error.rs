//! Search index error types.
//!
//! This module defines the unified error type for all search index operations,
//! including both transport-level failures and rejected requests.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait and `SearchIndexService`. None of these
/// are retried; callers are expected to abort the run.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Validation error (e.g., empty index name, missing object ID).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Failed to build the client or reach the search service.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A batch write was rejected or could not be sent.
    #[error("Batch error: {0}")]
    BatchError(String),

    /// The settings update was rejected or could not be sent.
    #[error("Settings error: {0}")]
    SettingsError(String),

    /// Failed to parse response from the search service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize data for the search service.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Batch size exceeds configured maximum.
    #[error("Batch size {provided} exceeds maximum {max}")]
    BatchSizeExceeded { provided: usize, max: usize },
}

impl SearchIndexError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a batch error.
    pub fn batch(msg: impl Into<String>) -> Self {
        Self::BatchError(msg.into())
    }

    /// Create a settings error.
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::SettingsError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a batch size exceeded error.
    pub fn batch_size_exceeded(provided: usize, max: usize) -> Self {
        Self::BatchSizeExceeded { provided, max }
    }
}
