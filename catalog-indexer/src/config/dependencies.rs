//! Dependency initialization and wiring for the catalog indexer.

use tracing::info;

use catalog_indexer_repository::{AlgoliaProvider, SearchIndexService};

use super::IndexerConfig;
use crate::assembler::CatalogAssembler;
use crate::orchestrator::Orchestrator;
use crate::publisher::IndexPublisher;
use crate::templates::CatalogTemplates;
use crate::IndexingError;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// See [`IndexerConfig::from_env`] for the variables read.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If a required variable is missing or the HTTP
    ///   client cannot be built
    pub fn new() -> Result<Self, IndexingError> {
        Self::from_config(IndexerConfig::from_env()?)
    }

    /// Wire the provider, service, publisher and orchestrator for `config`.
    pub fn from_config(config: IndexerConfig) -> Result<Self, IndexingError> {
        info!(
            app_id = %config.algolia.app_id,
            index_name = %config.algolia.index_name,
            base_url = %config.algolia.base_url(),
            dump_path = ?config.dump_path,
            "Initializing dependencies"
        );

        let provider = AlgoliaProvider::new(config.algolia).map_err(|e| {
            IndexingError::config(format!("Failed to create Algolia provider: {}", e))
        })?;

        let service = SearchIndexService::new(Box::new(provider));
        let publisher = IndexPublisher::new(service);
        let assembler = CatalogAssembler::new(CatalogTemplates::builtin());

        info!(
            templates = assembler.templates().len(),
            expected_records = assembler.expected_len(),
            "Catalog templates loaded"
        );

        let orchestrator = Orchestrator::new(assembler, publisher, config.dump_path);

        Ok(Self { orchestrator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_indexer_repository::AlgoliaConfig;
    use std::path::Path;

    #[test]
    fn test_from_config() {
        let config = IndexerConfig {
            algolia: AlgoliaConfig::new("APPID", "secret", "healthforge_items"),
            dump_path: Some("/tmp/items.json".into()),
        };

        let deps = Dependencies::from_config(config).unwrap();

        assert_eq!(
            deps.orchestrator.dump_path(),
            Some(Path::new("/tmp/items.json"))
        );
    }

    #[test]
    fn test_invalid_host() {
        let config = IndexerConfig {
            algolia: AlgoliaConfig::new("APPID", "secret", "healthforge_items")
                .with_host("not a url"),
            dump_path: None,
        };

        let err = Dependencies::from_config(config).err().unwrap();
        assert!(matches!(err, IndexingError::ConfigError(_)));
    }
}
