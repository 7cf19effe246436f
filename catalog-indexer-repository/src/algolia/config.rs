//! Connection settings for the Algolia provider.

use std::fmt;

/// Credentials and target index for the Algolia provider.
///
/// The admin key is redacted from `Debug` output so the config can be logged.
#[derive(Clone)]
pub struct AlgoliaConfig {
    /// Application identifier.
    pub app_id: String,
    /// Administrative API key with write access to the index.
    pub admin_key: String,
    /// Name of the index records are written to.
    pub index_name: String,
    /// Override for the API host, e.g. a local proxy. Defaults to
    /// `https://{app_id}.algolia.net`.
    pub host: Option<String>,
}

impl AlgoliaConfig {
    /// Create a configuration targeting the default Algolia host.
    pub fn new(
        app_id: impl Into<String>,
        admin_key: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            admin_key: admin_key.into(),
            index_name: index_name.into(),
            host: None,
        }
    }

    /// Send requests to `host` instead of the default Algolia host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// The root URL requests are sent to.
    pub fn base_url(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => format!("https://{}.algolia.net", self.app_id),
        }
    }
}

impl fmt::Debug for AlgoliaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgoliaConfig")
            .field("app_id", &self.app_id)
            .field("admin_key", &"<redacted>")
            .field("index_name", &self.index_name)
            .field("host", &self.host)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = AlgoliaConfig::new("RM2LBYLLID", "secret", "healthforge_items");
        assert_eq!(config.base_url(), "https://RM2LBYLLID.algolia.net");
    }

    #[test]
    fn test_host_override() {
        let config =
            AlgoliaConfig::new("RM2LBYLLID", "secret", "items").with_host("http://localhost:9000");
        assert_eq!(config.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_debug_redacts_admin_key() {
        let config = AlgoliaConfig::new("RM2LBYLLID", "ec65c46d-secret", "items");
        let debug = format!("{:?}", config);
        assert!(debug.contains("RM2LBYLLID"));
        assert!(!debug.contains("ec65c46d-secret"));
    }
}
