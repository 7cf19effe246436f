//! This module defines the core data structures used across the catalog indexer.
//! It re-exports the record type and its discriminants.

pub mod category;
pub mod wellness_record;

pub use category::{Category, Difficulty};
pub use wellness_record::{CategoryDetails, Macros, WellnessRecord};
