//! Configuration and dependency wiring for the catalog indexer.

mod dependencies;

use std::env;
use std::path::PathBuf;

use catalog_indexer_repository::algolia::DEFAULT_INDEX_NAME;
use catalog_indexer_repository::AlgoliaConfig;

use crate::dump::DEFAULT_DUMP_PATH;
use crate::IndexingError;

pub use dependencies::Dependencies;

const APP_ID_VAR: &str = "ALGOLIA_APP_ID";
const ADMIN_KEY_VAR: &str = "ALGOLIA_ADMIN_KEY";
const INDEX_NAME_VAR: &str = "ALGOLIA_INDEX_NAME";
const HOST_VAR: &str = "ALGOLIA_HOST";
const DUMP_PATH_VAR: &str = "CATALOG_DUMP_PATH";

/// Settings for one indexer run, read from the environment.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    pub algolia: AlgoliaConfig,
    /// Dump destination. `None` disables the dump.
    pub dump_path: Option<PathBuf>,
}

impl IndexerConfig {
    /// Read the configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ALGOLIA_APP_ID`: Application ID (required)
    /// - `ALGOLIA_ADMIN_KEY`: Admin API key (required)
    /// - `ALGOLIA_INDEX_NAME`: Target index (default: healthforge_items)
    /// - `ALGOLIA_HOST`: API host override (default: https://{app_id}.algolia.net)
    /// - `CATALOG_DUMP_PATH`: Dump file (default: /tmp/items.json, empty disables)
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string());
        let require = |name: &str| {
            get(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| IndexingError::config(format!("{} must be set", name)))
        };

        let app_id = require(APP_ID_VAR)?;
        let admin_key = require(ADMIN_KEY_VAR)?;
        let index_name = get(INDEX_NAME_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());

        let mut algolia = AlgoliaConfig::new(app_id, admin_key, index_name);
        if let Some(host) = get(HOST_VAR).filter(|v| !v.is_empty()) {
            algolia = algolia.with_host(host);
        }

        let dump_path = match get(DUMP_PATH_VAR) {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(PathBuf::from(path)),
            None => Some(PathBuf::from(DEFAULT_DUMP_PATH)),
        };

        Ok(Self { algolia, dump_path })
    }
}
