//! Meal plan record builder.

use std::ops::RangeInclusive;

use rand::Rng;

use catalog_indexer_shared::{
    derive_object_id, Category, CategoryDetails, Difficulty, WellnessRecord,
};

use super::{owned, pick, rating, sample, RecordTemplate, ANY_WEATHER};
use crate::templates::{MealPlanTemplate, GLOBAL_GOALS};

pub const MEAL_PLAN_RATING: RangeInclusive<f64> = 3.5..=5.0;

const PRICES_USD: [u32; 4] = [50, 75, 100, 150];
const EXTRA_GOALS: usize = 2;

impl MealPlanTemplate {
    pub fn description(&self) -> String {
        format!(
            "{} — {} kcal/day, {}g protein, {}g carbs, {}g fat. {} meals per day. Diet type: {}.",
            self.name,
            self.calories_daily,
            self.macros.protein_g,
            self.macros.carbs_g,
            self.macros.fat_g,
            self.meals_per_day,
            self.diet_type
        )
    }

    /// Plans with more than three meals a day take more effort to follow.
    pub fn difficulty(&self) -> Difficulty {
        if self.meals_per_day <= 3 {
            Difficulty::Beginner
        } else {
            Difficulty::Intermediate
        }
    }
}

impl RecordTemplate for MealPlanTemplate {
    const ID_PREFIX: &'static str = "meal";

    fn build<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> WellnessRecord {
        // The subcategory always leads; the sampled goals may repeat it.
        let mut goals = vec![self.subcategory.to_string()];
        goals.extend(sample(&GLOBAL_GOALS, EXTRA_GOALS, rng));

        WellnessRecord {
            object_id: derive_object_id(Self::ID_PREFIX, self.name, index),
            name: self.name.to_string(),
            category: Category::MealPlan,
            subcategory: self.subcategory.to_string(),
            difficulty: self.difficulty(),
            duration_minutes: 0,
            calories_per_30min: 0,
            muscle_groups: Vec::new(),
            equipment: Vec::new(),
            indoor: true,
            goals,
            weather_suitability: vec![ANY_WEATHER.to_string()],
            details: CategoryDetails::MealPlan {
                calories_daily: self.calories_daily,
                macros: self.macros,
                meals_per_day: self.meals_per_day,
                diet_type: self.diet_type.to_string(),
            },
            allergens: owned(self.allergens),
            description: self.description(),
            rating: rating(MEAL_PLAN_RATING, rng),
            compatibility_tags: vec![self.subcategory.to_string(), self.diet_type.to_string()],
            price_range_usd: pick(&PRICES_USD, rng),
        }
    }
}
