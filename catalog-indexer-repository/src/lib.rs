//! # Catalog Indexer Repository
//!
//! This crate provides traits and implementations for writing the wellness
//! catalog to a hosted search index. It includes definitions for errors,
//! interfaces, the index settings, and a concrete implementation for Algolia.

pub mod algolia;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod service;
pub mod types;
pub mod utils;

pub use algolia::{AlgoliaConfig, AlgoliaProvider, IndexSettings};
pub use config::SearchIndexServiceConfig;
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use service::SearchIndexService;
pub use types::{BatchOperationSummary, TaskResponse};
pub use utils::index_endpoint;
