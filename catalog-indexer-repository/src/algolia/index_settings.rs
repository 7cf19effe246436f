//! Algolia index settings for the wellness catalog.
//!
//! This module defines the searchable attributes, facets, ranking and response
//! shaping applied to the catalog index after every upload.

use std::fmt;

use serde::{Serialize, Serializer};

/// The default name of the catalog index.
pub const DEFAULT_INDEX_NAME: &str = "healthforge_items";

/// Default number of hits per result page.
pub const DEFAULT_HITS_PER_PAGE: u32 = 20;

/// A facet declaration in `attributesForFaceting`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetAttribute {
    /// Facet values can be filtered and counted.
    Plain(String),
    /// Facet values can also be searched (`searchable(attr)`).
    Searchable(String),
    /// Usable in filters only, no facet counts (`filterOnly(attr)`).
    FilterOnly(String),
}

impl fmt::Display for FacetAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetAttribute::Plain(attr) => f.write_str(attr),
            FacetAttribute::Searchable(attr) => write!(f, "searchable({})", attr),
            FacetAttribute::FilterOnly(attr) => write!(f, "filterOnly({})", attr),
        }
    }
}

impl Serialize for FacetAttribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A custom ranking criterion, applied after textual relevance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomRanking {
    Desc(String),
}

impl fmt::Display for CustomRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomRanking::Desc(attr) => write!(f, "desc({})", attr),
        }
    }
}

impl Serialize for CustomRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Full settings payload for the catalog index.
///
/// Serialized with the service's camelCase keys. Every field is always sent so
/// applying the same value twice leaves the index unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSettings {
    pub searchable_attributes: Vec<String>,
    pub attributes_for_faceting: Vec<FacetAttribute>,
    pub custom_ranking: Vec<CustomRanking>,
    pub attributes_to_retrieve: Vec<String>,
    pub attributes_to_highlight: Vec<String>,
    pub hits_per_page: u32,
}

fn owned(attrs: &[&str]) -> Vec<String> {
    attrs.iter().map(|attr| attr.to_string()).collect()
}

impl IndexSettings {
    /// Settings for the wellness catalog index.
    ///
    /// - Full-text search over names, descriptions, goals and tags
    /// - Searchable facets for the categorical fields, `indoor` as a plain facet
    /// - `rating` and `price_range_usd` as filter-only numeric attributes
    /// - Ties broken by `rating` descending
    pub fn wellness_catalog() -> Self {
        use FacetAttribute::{FilterOnly, Plain, Searchable};

        let facet = |ctor: fn(String) -> FacetAttribute, attr: &str| ctor(attr.to_string());

        Self {
            searchable_attributes: owned(&[
                "name",
                "category",
                "subcategory",
                "description",
                "goals",
                "muscle_groups",
                "benefits",
                "compatibility_tags",
                "diet_type",
            ]),
            attributes_for_faceting: vec![
                facet(Searchable, "category"),
                facet(Searchable, "subcategory"),
                facet(Searchable, "goals"),
                facet(Searchable, "difficulty"),
                facet(Searchable, "muscle_groups"),
                facet(Searchable, "diet_type"),
                facet(Searchable, "allergens"),
                facet(Plain, "indoor"),
                facet(FilterOnly, "rating"),
                facet(FilterOnly, "price_range_usd"),
                facet(Searchable, "weather_suitability"),
                facet(Searchable, "equipment"),
            ],
            custom_ranking: vec![CustomRanking::Desc("rating".to_string())],
            attributes_to_retrieve: owned(&[
                "name",
                "category",
                "subcategory",
                "difficulty",
                "duration_minutes",
                "calories_per_30min",
                "calories_daily",
                "macros",
                "meals_per_day",
                "muscle_groups",
                "equipment",
                "indoor",
                "goals",
                "weather_suitability",
                "benefits",
                "allergens",
                "dosage",
                "diet_type",
                "description",
                "rating",
                "compatibility_tags",
                "price_range_usd",
            ]),
            attributes_to_highlight: owned(&["name", "description", "goals", "benefits"]),
            hits_per_page: DEFAULT_HITS_PER_PAGE,
        }
    }
}
