//! Exercise record builder.

use std::ops::RangeInclusive;

use rand::Rng;

use catalog_indexer_shared::{derive_object_id, Category, CategoryDetails, WellnessRecord};

use super::{owned, pick, rating, sample, weather, RecordTemplate};
use crate::templates::ExerciseTemplate;

/// Rating range for exercises.
pub const EXERCISE_RATING: RangeInclusive<f64> = 3.5..=5.0;

const DURATIONS_MINUTES: [u32; 5] = [15, 20, 30, 45, 60];
const GOALS_PER_EXERCISE: usize = 2;

impl ExerciseTemplate {
    /// Human-readable summary, fully determined by the template.
    pub fn description(&self) -> String {
        format!(
            "{} — a {}-level {} exercise targeting {}. Burns approximately {} calories per 30 minutes.",
            self.name,
            self.difficulty,
            self.focus.as_str(),
            self.muscle_groups.join(", "),
            self.calories_per_30min
        )
    }
}

impl RecordTemplate for ExerciseTemplate {
    const ID_PREFIX: &'static str = "exercise";

    fn build<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> WellnessRecord {
        let subcategory = self.focus.as_str();

        let mut compatibility_tags = vec![subcategory.to_string(), self.difficulty.to_string()];
        compatibility_tags.extend(owned(self.muscle_groups));

        WellnessRecord {
            object_id: derive_object_id(Self::ID_PREFIX, &self.name, index),
            name: self.name.to_string(),
            category: Category::Exercise,
            subcategory: subcategory.to_string(),
            difficulty: self.difficulty,
            duration_minutes: pick(&DURATIONS_MINUTES, rng),
            calories_per_30min: self.calories_per_30min,
            muscle_groups: owned(self.muscle_groups),
            equipment: owned(self.equipment),
            indoor: self.indoor,
            goals: sample(self.focus.goal_pool(), GOALS_PER_EXERCISE, rng),
            weather_suitability: weather(self.indoor, rng),
            details: CategoryDetails::General {},
            allergens: Vec::new(),
            description: self.description(),
            rating: rating(EXERCISE_RATING, rng),
            compatibility_tags,
            price_range_usd: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{ExerciseFocus, EXERCISES};
    use catalog_indexer_shared::Difficulty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::borrow::Cow;

    fn morning_jog() -> &'static ExerciseTemplate {
        &EXERCISES[0]
    }

    #[test]
    fn test_morning_jog_record() {
        let mut rng = StdRng::seed_from_u64(42);
        let record = morning_jog().build(0, &mut rng);

        assert_eq!(record.name, "Morning Jog");
        assert_eq!(record.category, Category::Exercise);
        assert_eq!(record.subcategory, "cardio");
        assert_eq!(record.difficulty, Difficulty::Beginner);
        assert!(!record.indoor);
        assert_eq!(record.weather_suitability.len(), 2);
        assert!(record
            .weather_suitability
            .iter()
            .all(|w| ["mild", "cold", "hot"].contains(&w.as_str())));
        assert_eq!(
            record.description,
            "Morning Jog — a beginner-level cardio exercise targeting legs, core. Burns approximately 300 calories per 30 minutes."
        );
        assert_eq!(record.object_id, "38e2366d8892");
    }

    #[test]
    fn test_exercise_fields() {
        let mut rng = StdRng::seed_from_u64(1);
        let record = morning_jog().build(0, &mut rng);

        assert_eq!(record.muscle_groups, vec!["legs", "core"]);
        assert_eq!(record.calories_per_30min, 300);
        assert_eq!(record.price_range_usd, 0);
        assert!(record.allergens.is_empty());
        assert!(DURATIONS_MINUTES.contains(&record.duration_minutes));
        assert_eq!(
            record.compatibility_tags,
            vec!["cardio", "beginner", "legs", "core"]
        );
        assert_eq!(record.goals.len(), 2);
        for goal in &record.goals {
            assert!(ExerciseFocus::Cardio.goal_pool().contains(&goal.as_str()));
        }
        assert!(EXERCISE_RATING.contains(&record.rating));
    }

    #[test]
    fn test_indoor_exercise_is_any_weather() {
        let mut rng = StdRng::seed_from_u64(1);
        for template in EXERCISES.iter().filter(|t| t.indoor) {
            let record = template.build(3, &mut rng);
            assert_eq!(record.weather_suitability, vec!["any"], "{}", template.name);
        }
    }

    #[test]
    fn test_object_id_ignores_random_fields() {
        let first = morning_jog().build(0, &mut StdRng::seed_from_u64(1));
        let second = morning_jog().build(0, &mut StdRng::seed_from_u64(2));
        assert_eq!(first.object_id, second.object_id);
        assert_eq!(first.description, second.description);
    }

    #[test]
    fn test_renamed_template_changes_object_id() {
        let mut variant = morning_jog().clone();
        variant.name = Cow::Owned("Outdoor Morning Jog".to_string());

        let mut rng = StdRng::seed_from_u64(1);
        let base = morning_jog().build(30, &mut rng);
        let renamed = variant.build(30, &mut rng);

        assert_ne!(base.object_id, renamed.object_id);
        assert!(renamed.description.starts_with("Outdoor Morning Jog — "));
    }

    #[test]
    fn test_recovery_goals() {
        let sleep = EXERCISES
            .iter()
            .find(|t| t.name == "Sleep Optimization")
            .unwrap();
        let record = sleep.build(29, &mut StdRng::seed_from_u64(8));

        assert_eq!(record.subcategory, "recovery");
        assert_eq!(record.calories_per_30min, 0);
        for goal in &record.goals {
            assert!(["stress relief", "better sleep", "injury recovery"].contains(&goal.as_str()));
        }
    }
}
