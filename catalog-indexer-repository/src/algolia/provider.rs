//! Algolia provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using `reqwest` against the Algolia REST API.

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Response,
};
use serde::Serialize;
use tracing::{debug, error, info};
use url::Url;

use catalog_indexer_shared::WellnessRecord;

use crate::algolia::config::AlgoliaConfig;
use crate::algolia::index_settings::IndexSettings;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{BatchWriteRequest, TaskResponse};
use crate::utils;

const APPLICATION_ID_HEADER: &str = "x-algolia-application-id";
const API_KEY_HEADER: &str = "x-algolia-api-key";

/// Algolia provider implementation.
///
/// Writes records and settings to a single index. Authentication headers are
/// attached to every request by the underlying client.
///
/// # Example
///
/// ```ignore
/// use catalog_indexer_repository::algolia::{AlgoliaConfig, AlgoliaProvider, IndexSettings};
///
/// let config = AlgoliaConfig::new(app_id, admin_key, "healthforge_items");
/// let provider = AlgoliaProvider::new(config)?;
///
/// provider.save_objects(&records).await?;
/// provider.set_settings(&IndexSettings::wellness_catalog()).await?;
/// ```
pub struct AlgoliaProvider {
    client: Client,
    base_url: Url,
    index_name: String,
}

impl AlgoliaProvider {
    /// Create a new Algolia provider for the configured index.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials, index name and optional host override
    ///
    /// # Returns
    ///
    /// * `Ok(AlgoliaProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the host URL or credentials cannot be used
    pub fn new(config: AlgoliaConfig) -> Result<Self, SearchIndexError> {
        let base_url = Url::parse(&config.base_url())
            .map_err(|e| SearchIndexError::connection(format!("Invalid host: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            APPLICATION_ID_HEADER,
            HeaderValue::from_str(&config.app_id).map_err(|e| {
                SearchIndexError::connection(format!("Invalid application id: {}", e))
            })?,
        );
        let mut api_key = HeaderValue::from_str(&config.admin_key)
            .map_err(|e| SearchIndexError::connection(format!("Invalid admin key: {}", e)))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(
            base_url = %base_url,
            app_id = %config.app_id,
            index = %config.index_name,
            "Created Algolia provider"
        );

        Ok(Self {
            client,
            base_url,
            index_name: config.index_name,
        })
    }

    /// Serialize a request body, mapping failures to `SearchIndexError`.
    fn encode<T: Serialize>(body: &T) -> Result<Vec<u8>, SearchIndexError> {
        serde_json::to_vec(body).map_err(|e| SearchIndexError::serialization(e.to_string()))
    }

    /// Turn a service response into a `TaskResponse`.
    ///
    /// Non-2xx statuses are reported through `on_failure` with the status code
    /// and the response body.
    async fn read_task(
        response: Response,
        operation: &str,
        on_failure: fn(String) -> SearchIndexError,
    ) -> Result<TaskResponse, SearchIndexError> {
        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, operation, "Algolia request failed");
            return Err(on_failure(format!(
                "{} failed with status {}: {}",
                operation, status, error_body
            )));
        }

        response
            .json::<TaskResponse>()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))
    }
}

#[async_trait]
impl SearchIndexProvider for AlgoliaProvider {
    /// Create or replace a batch of records with one `batch` request.
    ///
    /// Each record becomes an `updateObject` action, so a record whose
    /// `objectID` already exists in the index is replaced wholesale.
    async fn save_objects(
        &self,
        records: &[WellnessRecord],
    ) -> Result<TaskResponse, SearchIndexError> {
        let url = utils::index_endpoint(&self.base_url, &self.index_name, "batch")?;
        let payload = Self::encode(&BatchWriteRequest::update_objects(records))?;

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| SearchIndexError::batch(e.to_string()))?;

        let task = Self::read_task(response, "Batch write", SearchIndexError::batch).await?;

        debug!(
            task_id = task.task_id,
            count = records.len(),
            "Batch accepted"
        );
        Ok(task)
    }

    /// Replace the index settings with one `settings` request.
    async fn set_settings(
        &self,
        settings: &IndexSettings,
    ) -> Result<TaskResponse, SearchIndexError> {
        let url = utils::index_endpoint(&self.base_url, &self.index_name, "settings")?;
        let payload = Self::encode(settings)?;

        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| SearchIndexError::settings(e.to_string()))?;

        let task = Self::read_task(response, "Settings update", SearchIndexError::settings).await?;

        debug!(task_id = task.task_id, "Settings accepted");
        Ok(task)
    }
}
