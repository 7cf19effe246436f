//! Configuration types for the SearchIndexService.

/// Configuration for the SearchIndexService.
///
/// Controls the largest batch the service will forward to the provider. The
/// publisher chunks well below this; the limit guards against a caller sending
/// the whole catalog in one request.
#[derive(Debug, Clone)]
pub struct SearchIndexServiceConfig {
    /// Maximum number of records allowed in a single batch write.
    ///
    /// Set to `None` to disable the limit.
    /// Defaults to 1000, the search service's recommended batch ceiling.
    pub max_batch_size: Option<usize>,
}

impl Default for SearchIndexServiceConfig {
    fn default() -> Self {
        Self {
            max_batch_size: Some(1000),
        }
    }
}

impl SearchIndexServiceConfig {
    /// Create a config with no batch size limit.
    pub fn unlimited() -> Self {
        Self {
            max_batch_size: None,
        }
    }

    /// Create a config with a custom batch size limit.
    ///
    /// # Arguments
    ///
    /// * `max_batch_size` - Maximum number of records allowed in a single batch write
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
        }
    }
}
