//! Extra item record builder.

use std::ops::RangeInclusive;

use rand::Rng;

use catalog_indexer_shared::{derive_object_id, CategoryDetails, Difficulty, WellnessRecord};

use super::{owned, pick, rating, RecordTemplate, ANY_WEATHER};
use crate::templates::ExtraTemplate;

pub const EXTRA_RATING: RangeInclusive<f64> = 4.0..=5.0;

const DURATIONS_MINUTES: [u32; 4] = [5, 10, 15, 20];
const PRICES_USD: [u32; 4] = [0, 15, 25, 50];
const MAX_CALORIES: u32 = 100;

const RECOVERY: &str = "recovery";

impl ExtraTemplate {
    pub fn description(&self) -> String {
        format!("{} — supports {}.", self.name, self.goals.join(", "))
    }

    fn muscle_groups(&self) -> Vec<String> {
        if self.subcategory == RECOVERY {
            vec!["mind".to_string()]
        } else {
            vec!["full body".to_string()]
        }
    }
}

impl RecordTemplate for ExtraTemplate {
    const ID_PREFIX: &'static str = "extra";

    fn build<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> WellnessRecord {
        WellnessRecord {
            object_id: derive_object_id(Self::ID_PREFIX, self.name, index),
            name: self.name.to_string(),
            category: self.category,
            subcategory: self.subcategory.to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: pick(&DURATIONS_MINUTES, rng),
            calories_per_30min: rng.gen_range(0..=MAX_CALORIES),
            muscle_groups: self.muscle_groups(),
            equipment: Vec::new(),
            indoor: true,
            goals: owned(self.goals),
            weather_suitability: vec![ANY_WEATHER.to_string()],
            details: CategoryDetails::General {},
            allergens: Vec::new(),
            description: self.description(),
            rating: rating(EXTRA_RATING, rng),
            compatibility_tags: owned(self.goals),
            price_range_usd: pick(&PRICES_USD, rng),
        }
    }
}
