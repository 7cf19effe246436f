//! Supplement record builder.

use std::ops::RangeInclusive;

use rand::Rng;

use catalog_indexer_shared::{
    derive_object_id, Category, CategoryDetails, Difficulty, WellnessRecord,
};

use super::{owned, rating, RecordTemplate, ANY_WEATHER};
use crate::templates::SupplementTemplate;

/// Rating range for supplements.
pub const SUPPLEMENT_RATING: RangeInclusive<f64> = 3.8..=5.0;

impl SupplementTemplate {
    pub fn description(&self) -> String {
        format!(
            "{} — supports {}. Recommended dosage: {}.",
            self.name,
            self.benefits.join(", "),
            self.dosage
        )
    }
}

impl RecordTemplate for SupplementTemplate {
    const ID_PREFIX: &'static str = "supplement";

    fn build<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> WellnessRecord {
        let subcategory = self.kind.as_str();

        let mut compatibility_tags = vec![subcategory.to_string()];
        compatibility_tags.extend(owned(self.benefits));

        WellnessRecord {
            object_id: derive_object_id(Self::ID_PREFIX, self.name, index),
            name: self.name.to_string(),
            category: Category::Supplement,
            subcategory: subcategory.to_string(),
            difficulty: Difficulty::Beginner,
            duration_minutes: 0,
            calories_per_30min: 0,
            muscle_groups: Vec::new(),
            equipment: Vec::new(),
            indoor: true,
            goals: owned(self.kind.goals()),
            weather_suitability: vec![ANY_WEATHER.to_string()],
            details: CategoryDetails::Supplement {
                benefits: owned(self.benefits),
                dosage: self.dosage.to_string(),
            },
            allergens: owned(self.allergens),
            description: self.description(),
            rating: rating(SUPPLEMENT_RATING, rng),
            compatibility_tags,
            price_range_usd: self.price_usd,
        }
    }
}
