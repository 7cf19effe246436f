//! Integration tests for the catalog indexer orchestrator.
//!
//! These tests use the real Orchestrator, assembler and publisher with a mock
//! SearchIndexProvider in place of Algolia.

use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use catalog_indexer::assembler::CatalogAssembler;
use catalog_indexer::errors::CatalogError;
use catalog_indexer::orchestrator::Orchestrator;
use catalog_indexer::publisher::IndexPublisher;
use catalog_indexer::templates::CatalogTemplates;
use catalog_indexer_repository::{
    IndexSettings, SearchIndexError, SearchIndexProvider, SearchIndexService, TaskResponse,
};
use catalog_indexer_shared::{Category, WellnessRecord};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Batch(Vec<String>),
    Settings(serde_json::Value),
}

// Mock Search Provider for testing
struct MockSearchProvider {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_on_batch: Option<usize>,
}

impl MockSearchProvider {
    fn new() -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
                fail_on_batch: None,
            },
            calls,
        )
    }

    fn failing_on(batch: usize) -> (Self, Arc<Mutex<Vec<Call>>>) {
        let (mut provider, calls) = Self::new();
        provider.fail_on_batch = Some(batch);
        (provider, calls)
    }
}

#[async_trait]
impl SearchIndexProvider for MockSearchProvider {
    async fn save_objects(
        &self,
        records: &[WellnessRecord],
    ) -> Result<TaskResponse, SearchIndexError> {
        let mut calls = self.calls.lock().await;
        let object_ids: Vec<String> = records.iter().map(|r| r.object_id.clone()).collect();
        calls.push(Call::Batch(object_ids.clone()));

        let batch_number = calls
            .iter()
            .filter(|c| matches!(c, Call::Batch(_)))
            .count();
        if Some(batch_number) == self.fail_on_batch {
            return Err(SearchIndexError::batch("HTTP 403: Invalid Application-ID or API key"));
        }

        Ok(TaskResponse {
            task_id: batch_number as u64,
            object_ids,
        })
    }

    async fn set_settings(
        &self,
        settings: &IndexSettings,
    ) -> Result<TaskResponse, SearchIndexError> {
        let body = serde_json::to_value(settings)
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;
        self.calls.lock().await.push(Call::Settings(body));
        Ok(TaskResponse {
            task_id: 1000,
            object_ids: Vec::new(),
        })
    }
}

fn orchestrator(provider: MockSearchProvider, dump_path: Option<std::path::PathBuf>) -> Orchestrator {
    let publisher = IndexPublisher::new(SearchIndexService::new(Box::new(provider)));
    let assembler = CatalogAssembler::new(CatalogTemplates::builtin());
    Orchestrator::new(assembler, publisher, dump_path)
}

fn builtin_catalog(seed: u64) -> Vec<WellnessRecord> {
    CatalogAssembler::new(CatalogTemplates::builtin()).assemble(&mut StdRng::seed_from_u64(seed))
}

#[tokio::test]
async fn test_full_run_dumps_and_publishes() {
    let dir = tempfile::tempdir().unwrap();
    let dump_path = dir.path().join("items.json");
    let (provider, calls) = MockSearchProvider::new();
    let orchestrator = orchestrator(provider, Some(dump_path.clone()));

    let records = builtin_catalog(42);
    let expected_ids: Vec<String> = records.iter().map(|r| r.object_id.clone()).collect();

    let summary = orchestrator.run_catalog(records).await.unwrap();

    assert_eq!(summary.generated, 110);
    assert_eq!(summary.publish.records, 110);
    assert_eq!(summary.publish.batches, 2);
    assert_eq!(summary.publish.settings_task_id, 1000);
    assert_eq!(summary.dump_path.as_deref(), Some(dump_path.as_path()));

    let calls = calls.lock().await;
    assert_eq!(calls.len(), 3);
    match (&calls[0], &calls[1]) {
        (Call::Batch(first), Call::Batch(second)) => {
            assert_eq!(first.len(), 100);
            assert_eq!(second.len(), 10);
            let uploaded: Vec<String> = first.iter().chain(second).cloned().collect();
            assert_eq!(uploaded, expected_ids);
        }
        other => panic!("expected two batches, got {:?}", other),
    }
    match &calls[2] {
        Call::Settings(body) => {
            assert_eq!(body["customRanking"], serde_json::json!(["desc(rating)"]));
            assert_eq!(body["hitsPerPage"], 20);
        }
        other => panic!("expected settings, got {:?}", other),
    }

    let dumped: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&dump_path).unwrap()).unwrap();
    assert_eq!(dumped.len(), 110);
    assert_eq!(dumped[0]["name"], "Morning Jog");
    assert_eq!(dumped[0]["objectID"], expected_ids[0].as_str());
}

#[tokio::test]
async fn test_failed_batch_prevents_settings() {
    let (provider, calls) = MockSearchProvider::failing_on(2);
    let orchestrator = orchestrator(provider, None);

    let err = orchestrator
        .run_catalog(builtin_catalog(7))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::PublishError(_)));
    assert!(err.to_string().contains("HTTP 403"));

    let calls = calls.lock().await;
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|c| matches!(c, Call::Batch(_))));
}

#[tokio::test]
async fn test_dump_failure_skips_upload() {
    let dir = tempfile::tempdir().unwrap();
    let (provider, calls) = MockSearchProvider::new();
    let orchestrator = orchestrator(provider, Some(dir.path().join("missing").join("items.json")));

    let err = orchestrator
        .run_catalog(builtin_catalog(7))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::DumpError(_)));
    assert!(calls.lock().await.is_empty());
}

#[tokio::test]
async fn test_run_generates_fresh_catalog() {
    let (provider, calls) = MockSearchProvider::new();
    let orchestrator = orchestrator(provider, None);

    let summary = orchestrator.run().await.unwrap();

    assert_eq!(summary.generated, 110);
    assert_eq!(summary.dump_path, None);
    assert_eq!(calls.lock().await.len(), 3);
}

#[tokio::test]
async fn test_categories_in_catalog_order() {
    let (provider, calls) = MockSearchProvider::new();
    let orchestrator = orchestrator(provider, None);
    let records = builtin_catalog(3);
    let categories: Vec<Category> = records.iter().map(|r| r.category).collect();

    orchestrator.run_catalog(records).await.unwrap();

    let first_meal = categories
        .iter()
        .position(|c| *c == Category::MealPlan)
        .unwrap();
    let last_supplement = categories
        .iter()
        .rposition(|c| *c == Category::Supplement)
        .unwrap();
    assert!(last_supplement < first_meal);
    assert_eq!(calls.lock().await.len(), 3);
}
