//! Algolia implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! over the Algolia REST API.

mod config;
mod index_settings;
mod provider;

pub use config::AlgoliaConfig;
pub use index_settings::{
    CustomRanking, FacetAttribute, IndexSettings, DEFAULT_HITS_PER_PAGE, DEFAULT_INDEX_NAME,
};
pub use provider::AlgoliaProvider;
