//! Search index service implementation.
//!
//! This module provides the main service for writing to the search index.
//! Application code uses this to upsert record batches and apply settings.

use catalog_indexer_shared::WellnessRecord;

use crate::algolia::IndexSettings;
use crate::config::SearchIndexServiceConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BatchOperationSummary, TaskResponse};

/// The main service for interacting with the search index.
///
/// This is the high-level API that application code should use. It guards batch
/// sizes, checks that every record carries an object ID, and delegates to a
/// `SearchIndexProvider` for the actual backend calls.
///
/// # Example
///
/// ```no_run
/// use catalog_indexer_repository::algolia::{AlgoliaConfig, AlgoliaProvider, IndexSettings};
/// use catalog_indexer_repository::SearchIndexService;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AlgoliaConfig::new("APPID", "admin-key", "healthforge_items");
/// let provider = Box::new(AlgoliaProvider::new(config)?);
/// let service = SearchIndexService::new(provider);
///
/// service.apply_settings(&IndexSettings::wellness_catalog()).await?;
/// # Ok(())
/// # }
/// ```
pub struct SearchIndexService {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchIndexServiceConfig,
}

impl SearchIndexService {
    /// Create a new SearchIndexService with default configuration.
    ///
    /// The default configuration includes a batch size limit of 1000 records.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexServiceConfig::default(),
        }
    }

    /// Create a new SearchIndexService with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `provider` - A boxed implementation of `SearchIndexProvider` (e.g., `AlgoliaProvider`)
    /// * `config` - Custom configuration for the service
    pub fn with_config(
        provider: Box<dyn SearchIndexProvider>,
        config: SearchIndexServiceConfig,
    ) -> Self {
        Self { provider, config }
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Records are keyed by object ID, so an empty one would be rejected by the service.
    fn validate_object_id(record: &WellnessRecord) -> Result<(), SearchIndexError> {
        if record.object_id.is_empty() {
            return Err(SearchIndexError::validation(format!(
                "objectID is required (record '{}')",
                record.name
            )));
        }
        Ok(())
    }

    /// Create or replace a batch of records.
    ///
    /// # Arguments
    ///
    /// * `records` - Records to upsert, keyed by `objectID`
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - The batch was accepted (or was empty and skipped)
    /// * `Err(SearchIndexError::BatchSizeExceeded)` - If the batch exceeds the configured maximum
    /// * `Err(SearchIndexError::ValidationError)` - If any record has an empty object ID
    /// * `Err(SearchIndexError)` - If the provider call fails
    pub async fn save_batch(
        &self,
        records: &[WellnessRecord],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        if records.is_empty() {
            return Ok(BatchOperationSummary::empty());
        }

        self.validate_batch_size(records.len())?;

        for record in records {
            Self::validate_object_id(record)?;
        }

        let task = self.provider.save_objects(records).await?;

        Ok(BatchOperationSummary {
            total: records.len(),
            task_id: Some(task.task_id),
            object_ids: task.object_ids,
        })
    }

    /// Replace the index settings.
    ///
    /// Safe to repeat: the full settings are sent every time.
    pub async fn apply_settings(
        &self,
        settings: &IndexSettings,
    ) -> Result<TaskResponse, SearchIndexError> {
        self.provider.set_settings(settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_indexer_shared::{Category, CategoryDetails, Difficulty};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Mock provider recording the size of every batch it receives.
    struct MockProvider {
        batches: Arc<Mutex<Vec<usize>>>,
        settings_calls: Arc<Mutex<usize>>,
        should_fail: bool,
    }

    impl MockProvider {
        fn new() -> Self {
            Self {
                batches: Arc::new(Mutex::new(Vec::new())),
                settings_calls: Arc::new(Mutex::new(0)),
                should_fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                should_fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockProvider {
        async fn save_objects(
            &self,
            records: &[WellnessRecord],
        ) -> Result<TaskResponse, SearchIndexError> {
            if self.should_fail {
                return Err(SearchIndexError::batch("Mock failure"));
            }
            self.batches.lock().await.push(records.len());
            Ok(TaskResponse {
                task_id: 1,
                object_ids: records.iter().map(|r| r.object_id.clone()).collect(),
            })
        }

        async fn set_settings(
            &self,
            _settings: &IndexSettings,
        ) -> Result<TaskResponse, SearchIndexError> {
            if self.should_fail {
                return Err(SearchIndexError::settings("Mock failure"));
            }
            *self.settings_calls.lock().await += 1;
            Ok(TaskResponse {
                task_id: 2,
                object_ids: vec![],
            })
        }
    }

    fn create_test_record(object_id: &str) -> WellnessRecord {
        WellnessRecord {
            object_id: object_id.to_string(),
            name: "Creatine Monohydrate".to_string(),
            category: Category::Supplement,
            subcategory: "performance".to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: 0,
            calories_per_30min: 0,
            muscle_groups: vec![],
            equipment: vec![],
            indoor: true,
            goals: vec!["strength".to_string()],
            weather_suitability: vec!["any".to_string()],
            details: CategoryDetails::Supplement {
                benefits: vec!["strength gains".to_string()],
                dosage: "5g daily".to_string(),
            },
            allergens: vec![],
            description: "Creatine Monohydrate".to_string(),
            rating: 4.4,
            compatibility_tags: vec!["performance".to_string()],
            price_range_usd: 25,
        }
    }

    #[tokio::test]
    async fn test_save_batch_empty() {
        let provider = MockProvider::new();
        let batches = provider.batches.clone();
        let service = SearchIndexService::new(Box::new(provider));

        let result = service.save_batch(&[]).await.unwrap();

        assert_eq!(result, BatchOperationSummary::empty());
        assert!(batches.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_batch_multiple() {
        let provider = MockProvider::new();
        let batches = provider.batches.clone();
        let service = SearchIndexService::new(Box::new(provider));

        let records = vec![
            create_test_record("aaa111"),
            create_test_record("bbb222"),
            create_test_record("ccc333"),
        ];

        let result = service.save_batch(&records).await.unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(result.task_id, Some(1));
        assert_eq!(result.object_ids, vec!["aaa111", "bbb222", "ccc333"]);
        assert_eq!(*batches.lock().await, vec![3]);
    }

    #[tokio::test]
    async fn test_save_batch_validation() {
        let provider = MockProvider::new();
        let batches = provider.batches.clone();
        let service = SearchIndexService::new(Box::new(provider));

        let records = vec![create_test_record("aaa111"), create_test_record("")];
        let result = service.save_batch(&records).await;

        assert!(matches!(
            result.unwrap_err(),
            SearchIndexError::ValidationError(_)
        ));
        assert!(batches.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_batch_size_exceeded() {
        let provider = MockProvider::new();
        let config = SearchIndexServiceConfig::with_max_batch_size(2);
        let service = SearchIndexService::with_config(Box::new(provider), config);

        let records: Vec<WellnessRecord> = (0..3)
            .map(|i| create_test_record(&format!("id{}", i)))
            .collect();

        match service.save_batch(&records).await {
            Err(SearchIndexError::BatchSizeExceeded { provided, max }) => {
                assert_eq!(provided, 3);
                assert_eq!(max, 2);
            }
            other => panic!("Expected BatchSizeExceeded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_batch_size_unlimited() {
        let provider = MockProvider::new();
        let service =
            SearchIndexService::with_config(Box::new(provider), SearchIndexServiceConfig::unlimited());

        let records: Vec<WellnessRecord> = (0..2500)
            .map(|i| create_test_record(&format!("id{}", i)))
            .collect();

        let result = service.save_batch(&records).await.unwrap();
        assert_eq!(result.total, 2500);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let service = SearchIndexService::new(Box::new(MockProvider::failing()));

        let result = service.save_batch(&[create_test_record("aaa111")]).await;
        assert!(matches!(result.unwrap_err(), SearchIndexError::BatchError(_)));

        let result = service
            .apply_settings(&IndexSettings::wellness_catalog())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            SearchIndexError::SettingsError(_)
        ));
    }

    #[tokio::test]
    async fn test_apply_settings_is_repeatable() {
        let provider = MockProvider::new();
        let settings_calls = provider.settings_calls.clone();
        let service = SearchIndexService::new(Box::new(provider));
        let settings = IndexSettings::wellness_catalog();

        service.apply_settings(&settings).await.unwrap();
        service.apply_settings(&settings).await.unwrap();

        assert_eq!(*settings_calls.lock().await, 2);
    }
}
