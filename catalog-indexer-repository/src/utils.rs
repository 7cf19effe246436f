//! Utility functions for the catalog indexer repository.

use url::Url;

use crate::errors::SearchIndexError;

/// Build the endpoint URL for an index-scoped operation.
///
/// Produces `{base}/1/indexes/{index_name}/{operation}`, percent-encoding the
/// index name so names with spaces or slashes stay a single path segment.
///
/// # Arguments
///
/// * `base_url` - Root URL of the search service (e.g. `https://APPID.algolia.net`)
/// * `index_name` - Target index
/// * `operation` - Trailing path segment such as `batch` or `settings`
///
/// # Example
///
/// ```
/// use catalog_indexer_repository::index_endpoint;
/// use url::Url;
///
/// let base = Url::parse("https://APPID.algolia.net").unwrap();
/// let url = index_endpoint(&base, "healthforge_items", "batch").unwrap();
/// assert_eq!(url.as_str(), "https://appid.algolia.net/1/indexes/healthforge_items/batch");
/// ```
pub fn index_endpoint(
    base_url: &Url,
    index_name: &str,
    operation: &str,
) -> Result<Url, SearchIndexError> {
    if index_name.is_empty() {
        return Err(SearchIndexError::validation("Index name is required"));
    }

    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| {
            SearchIndexError::validation(format!("Invalid base URL for search service: {}", base_url))
        })?
        .pop_if_empty()
        .extend(["1", "indexes", index_name, operation]);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_endpoint() {
        let base = Url::parse("https://RM2LBYLLID.algolia.net").unwrap();
        let url = index_endpoint(&base, "healthforge_items", "settings").unwrap();
        assert_eq!(
            url.as_str(),
            "https://rm2lbyllid.algolia.net/1/indexes/healthforge_items/settings"
        );
    }

    #[test]
    fn test_index_endpoint_keeps_base_path() {
        let base = Url::parse("http://localhost:8080/proxy/").unwrap();
        let url = index_endpoint(&base, "items", "batch").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/1/indexes/items/batch");
    }

    #[test]
    fn test_index_endpoint_encodes_index_name() {
        let base = Url::parse("https://example.algolia.net").unwrap();
        let url = index_endpoint(&base, "wellness items/v2", "batch").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.algolia.net/1/indexes/wellness%20items%2Fv2/batch"
        );
    }

    #[test]
    fn test_index_endpoint_empty_index() {
        let base = Url::parse("https://example.algolia.net").unwrap();
        let result = index_endpoint(&base, "", "batch");
        assert!(matches!(
            result.unwrap_err(),
            SearchIndexError::ValidationError(_)
        ));
    }

    #[test]
    fn test_index_endpoint_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(index_endpoint(&base, "items", "batch").is_err());
    }
}
