//! Gear record builder.

use std::ops::RangeInclusive;

use rand::Rng;

use catalog_indexer_shared::{
    derive_object_id, Category, CategoryDetails, Difficulty, WellnessRecord,
};

use super::{owned, rating, RecordTemplate, ANY_WEATHER};
use crate::templates::GearTemplate;

pub const GEAR_RATING: RangeInclusive<f64> = 3.5..=5.0;

impl GearTemplate {
    pub fn description(&self) -> String {
        format!(
            "{} — essential equipment for {}. Durability: {}.",
            self.name,
            self.for_goals.join(", "),
            self.durability.as_str()
        )
    }
}

impl RecordTemplate for GearTemplate {
    const ID_PREFIX: &'static str = "gear";

    fn build<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> WellnessRecord {
        let mut compatibility_tags = vec![
            self.subcategory.to_string(),
            self.durability.as_str().to_string(),
        ];
        compatibility_tags.extend(owned(self.for_goals));

        WellnessRecord {
            object_id: derive_object_id(Self::ID_PREFIX, self.name, index),
            name: self.name.to_string(),
            category: Category::Gear,
            subcategory: self.subcategory.to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: 0,
            calories_per_30min: 0,
            muscle_groups: Vec::new(),
            equipment: Vec::new(),
            indoor: true,
            goals: owned(self.for_goals),
            weather_suitability: vec![ANY_WEATHER.to_string()],
            details: CategoryDetails::General {},
            allergens: Vec::new(),
            description: self.description(),
            rating: rating(GEAR_RATING, rng),
            compatibility_tags,
            price_range_usd: self.price_usd,
        }
    }
}
