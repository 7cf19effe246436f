//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing the hosted backend to be replaced by a mock in tests.

use async_trait::async_trait;

use catalog_indexer_shared::WellnessRecord;

use crate::algolia::IndexSettings;
use crate::errors::SearchIndexError;
use crate::types::TaskResponse;

/// Abstracts the underlying search index implementation.
///
/// Implementations are injected into `SearchIndexService`. All methods return
/// `Result<T, SearchIndexError>`; no implementation is expected to retry.
///
/// # Note on Upserts
///
/// There is no separate create or update call. `save_objects` replaces any
/// existing record with the same `objectID` and creates the rest.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Create or replace a batch of records, keyed by `objectID`.
    ///
    /// # Arguments
    ///
    /// * `records` - Records to write, in submission order
    ///
    /// # Returns
    ///
    /// * `Ok(TaskResponse)` - The service accepted the batch
    /// * `Err(SearchIndexError)` - The request failed or was rejected
    async fn save_objects(
        &self,
        records: &[WellnessRecord],
    ) -> Result<TaskResponse, SearchIndexError>;

    /// Replace the index settings.
    ///
    /// Every managed setting is sent on each call, so the previous values are
    /// overwritten rather than merged and repeating the call is idempotent.
    ///
    /// # Arguments
    ///
    /// * `settings` - Full settings for the index
    ///
    /// # Returns
    ///
    /// * `Ok(TaskResponse)` - The service accepted the settings
    /// * `Err(SearchIndexError)` - The request failed or was rejected
    async fn set_settings(&self, settings: &IndexSettings)
        -> Result<TaskResponse, SearchIndexError>;
}
