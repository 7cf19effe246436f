//! # Catalog Indexer Shared
//!
//! This crate defines the record types shared across the catalog indexer crates.
//! It includes the uniform wellness record schema uploaded to the search index
//! and the deterministic object ID derivation.

pub mod object_id;
pub mod types;

pub use object_id::{derive_object_id, OBJECT_ID_LEN};
pub use types::category::{Category, Difficulty};
pub use types::wellness_record::{CategoryDetails, Macros, WellnessRecord};
