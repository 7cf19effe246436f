//! Wellness record types for the search index.
//!
//! This module defines the record structure that is dumped locally and uploaded
//! to the search index.

use serde::{Deserialize, Serialize};

use crate::types::category::{Category, Difficulty};

/// Record representation for the search index.
///
/// Every record carries the same set of fields regardless of category so the
/// index schema stays uniform. Fields that do not apply to a category hold
/// empty lists or zero. Category-specific fields live in [`CategoryDetails`],
/// which is flattened into the top-level JSON object.
///
/// # Fields
///
/// - `object_id`: Index key, serialized as `objectID` (see [`crate::derive_object_id`])
/// - `category`: Discriminant for the record (exercise, supplement, gear, meal_plan)
/// - `rating`: One-decimal rating used as the custom ranking tiebreak
/// - `weather_suitability`: `["any"]` for indoor items, two conditions otherwise
/// - `details`: Supplement or meal-plan payload, empty for everything else
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellnessRecord {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub name: String,
    pub category: Category,
    pub subcategory: String,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub calories_per_30min: u32,
    pub muscle_groups: Vec<String>,
    pub equipment: Vec<String>,
    pub indoor: bool,
    pub goals: Vec<String>,
    pub weather_suitability: Vec<String>,
    #[serde(flatten)]
    pub details: CategoryDetails,
    pub allergens: Vec<String>,
    pub description: String,
    pub rating: f64,
    pub compatibility_tags: Vec<String>,
    pub price_range_usd: u32,
}

/// Category-specific payload of a [`WellnessRecord`].
///
/// Serialized untagged and flattened, so a supplement record gains top-level
/// `benefits` and `dosage` keys and a meal plan gains `calories_daily`,
/// `macros`, `meals_per_day` and `diet_type`. `General` adds nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CategoryDetails {
    Supplement {
        benefits: Vec<String>,
        dosage: String,
    },
    MealPlan {
        calories_daily: u32,
        macros: Macros,
        meals_per_day: u32,
        diet_type: String,
    },
    General {},
}

/// Daily macronutrient targets of a meal plan, in grams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Macros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}
