//! Publisher module for the catalog indexer.
//!
//! Uploads the catalog to the search index in fixed-size batches, then
//! replaces the index settings.

use tracing::{debug, error, info, instrument};

use catalog_indexer_repository::{IndexSettings, SearchIndexService};
use catalog_indexer_shared::WellnessRecord;

use crate::errors::CatalogError;

/// Configuration for the index publisher.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Number of records sent per upsert call.
    pub batch_size: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self { batch_size: 100 }
    }
}

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    /// Records uploaded.
    pub records: usize,
    /// Upsert calls made.
    pub batches: usize,
    /// Task created by the settings update.
    pub settings_task_id: u64,
}

/// Publisher that writes the catalog to the search index.
///
/// Batches are sent one at a time in catalog order. The first failing batch
/// aborts the publish; batches already accepted stay in the index. Settings
/// are applied only once every batch has been accepted.
pub struct IndexPublisher {
    service: SearchIndexService,
    settings: IndexSettings,
    config: PublisherConfig,
}

impl IndexPublisher {
    /// Create a publisher applying the wellness catalog settings.
    pub fn new(service: SearchIndexService) -> Self {
        Self {
            service,
            settings: IndexSettings::wellness_catalog(),
            config: PublisherConfig::default(),
        }
    }

    /// Create a publisher with custom settings and configuration.
    pub fn with_config(
        service: SearchIndexService,
        settings: IndexSettings,
        config: PublisherConfig,
    ) -> Self {
        Self {
            service,
            settings,
            config,
        }
    }

    fn batch_size(&self) -> usize {
        self.config.batch_size.max(1)
    }

    /// Upload `records` and apply the index settings.
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub async fn publish(&self, records: &[WellnessRecord]) -> Result<PublishSummary, CatalogError> {
        let batch_size = self.batch_size();
        let total_batches = records.len().div_ceil(batch_size);

        for (position, batch) in records.chunks(batch_size).enumerate() {
            let number = position + 1;
            let summary = self.service.save_batch(batch).await.map_err(|e| {
                error!(batch = number, total_batches, error = %e, "Failed to upload batch");
                CatalogError::publish(format!(
                    "Batch {}/{} ({} records) failed: {}",
                    number,
                    total_batches,
                    batch.len(),
                    e
                ))
            })?;

            debug!(task_id = ?summary.task_id, "Batch accepted");
            info!("Uploaded batch {}/{}", number, total_batches);
        }

        let task = self.service.apply_settings(&self.settings).await.map_err(|e| {
            error!(error = %e, "Failed to apply index settings");
            CatalogError::publish(format!("Failed to apply index settings: {}", e))
        })?;

        info!(task_id = task.task_id, "Index settings configured");

        Ok(PublishSummary {
            records: records.len(),
            batches: total_batches,
            settings_task_id: task.task_id,
        })
    }
}
