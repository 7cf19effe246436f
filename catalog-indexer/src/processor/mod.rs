//! Record builders for the wellness catalog.
//!
//! Transforms category templates into uniform [`WellnessRecord`]s. Each
//! template type implements [`RecordTemplate`]; the builders are pure apart
//! from the injected random source, which drives goal, weather, rating and a
//! few numeric picks.

mod exercise;
mod extra;
mod gear;
mod meal_plan;
mod supplement;

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use catalog_indexer_shared::WellnessRecord;

use crate::templates::WEATHER_CONDITIONS;

pub use exercise::EXERCISE_RATING;
pub use extra::EXTRA_RATING;
pub use gear::GEAR_RATING;
pub use meal_plan::MEAL_PLAN_RATING;
pub use supplement::SUPPLEMENT_RATING;

/// A template that can be turned into one catalog record.
pub trait RecordTemplate {
    /// Prefix mixed into the object ID hash, unique per builder.
    const ID_PREFIX: &'static str;

    /// Build the record for this template at `index`.
    ///
    /// `index` must be unique within a run; it only feeds the object ID.
    fn build<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> WellnessRecord;
}

/// Weather tag for items that do not depend on conditions.
pub const ANY_WEATHER: &str = "any";

/// Number of weather conditions an outdoor item is tagged with.
pub const OUTDOOR_WEATHER_COUNT: usize = 2;

pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Pick `amount` distinct entries from `pool` without replacement.
pub(crate) fn sample<R: Rng + ?Sized>(pool: &[&str], amount: usize, rng: &mut R) -> Vec<String> {
    pool.choose_multiple(rng, amount)
        .map(|item| item.to_string())
        .collect()
}

pub(crate) fn pick<T: Copy, R: Rng + ?Sized, const N: usize>(options: &[T; N], rng: &mut R) -> T {
    options[rng.gen_range(0..N)]
}

/// Uniform rating in `range`, rounded to one decimal place.
pub(crate) fn rating<R: Rng + ?Sized>(range: RangeInclusive<f64>, rng: &mut R) -> f64 {
    (rng.gen_range(range) * 10.0).round() / 10.0
}

/// `["any"]` indoors, otherwise two distinct conditions.
pub(crate) fn weather<R: Rng + ?Sized>(indoor: bool, rng: &mut R) -> Vec<String> {
    if indoor {
        vec![ANY_WEATHER.to_string()]
    } else {
        sample(&WEATHER_CONDITIONS, OUTDOOR_WEATHER_COUNT, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_rating_has_one_decimal() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let value = rating(3.5..=5.0, &mut rng);
            assert!((3.5..=5.0).contains(&value), "{}", value);
            assert!(((value * 10.0).round() - value * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sample_is_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let picked = sample(&["a", "b", "c", "d"], 2, &mut rng);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(picked.len(), 2);
            assert_eq!(unique.len(), 2);
        }
    }

    #[test]
    fn test_sample_caps_at_pool_size() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(sample(&["only"], 2, &mut rng), vec!["only"]);
    }

    #[test]
    fn test_weather_indoor() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(weather(true, &mut rng), vec!["any"]);
    }

    #[test]
    fn test_weather_outdoor() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let tags = weather(false, &mut rng);
            assert_eq!(tags.len(), OUTDOOR_WEATHER_COUNT);
            assert_ne!(tags[0], tags[1]);
            assert!(tags
                .iter()
                .all(|tag| WEATHER_CONDITIONS.contains(&tag.as_str())));
        }
    }

    #[test]
    fn test_pick_stays_in_options() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            assert!([15, 20, 30].contains(&pick(&[15, 20, 30], &mut rng)));
        }
    }
}
