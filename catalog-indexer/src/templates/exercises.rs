//! Built-in exercise templates.

use std::borrow::Cow;

use catalog_indexer_shared::Difficulty;

use super::{ExerciseFocus, ExerciseTemplate};

use Difficulty::{Advanced, Beginner, Intermediate};
use ExerciseFocus::{Cardio, Flexibility, Recovery, Strength};

const fn exercise(
    name: &'static str,
    focus: ExerciseFocus,
    muscle_groups: &'static [&'static str],
    calories_per_30min: u32,
    difficulty: Difficulty,
    equipment: &'static [&'static str],
    indoor: bool,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name: Cow::Borrowed(name),
        focus,
        muscle_groups,
        calories_per_30min,
        difficulty,
        equipment,
        indoor,
    }
}

pub static EXERCISES: &[ExerciseTemplate] = &[
    // Cardio
    exercise(
        "Morning Jog",
        Cardio,
        &["legs", "core"],
        300,
        Beginner,
        &[],
        false,
    ),
    exercise(
        "HIIT Sprint Intervals",
        Cardio,
        &["legs", "core", "glutes"],
        450,
        Advanced,
        &[],
        false,
    ),
    exercise(
        "Jump Rope Circuit",
        Cardio,
        &["legs", "shoulders", "core"],
        400,
        Intermediate,
        &["jump rope"],
        true,
    ),
    exercise(
        "Cycling Endurance",
        Cardio,
        &["legs", "glutes"],
        350,
        Intermediate,
        &["bicycle"],
        false,
    ),
    exercise(
        "Swimming Laps",
        Cardio,
        &["full body"],
        380,
        Intermediate,
        &["pool access"],
        true,
    ),
    exercise(
        "Rowing Machine",
        Cardio,
        &["back", "arms", "legs"],
        360,
        Intermediate,
        &["rowing machine"],
        true,
    ),
    exercise(
        "Stair Climbing",
        Cardio,
        &["legs", "glutes", "core"],
        400,
        Beginner,
        &[],
        true,
    ),
    exercise(
        "Dance Cardio",
        Cardio,
        &["full body"],
        320,
        Beginner,
        &[],
        true,
    ),
    exercise(
        "Boxing Workout",
        Cardio,
        &["arms", "shoulders", "core"],
        420,
        Intermediate,
        &["boxing gloves", "heavy bag"],
        true,
    ),
    exercise(
        "Elliptical Training",
        Cardio,
        &["legs", "arms"],
        280,
        Beginner,
        &["elliptical"],
        true,
    ),
    // Strength
    exercise(
        "Barbell Squat",
        Strength,
        &["legs", "glutes", "core"],
        250,
        Intermediate,
        &["barbell", "squat rack"],
        true,
    ),
    exercise(
        "Deadlift",
        Strength,
        &["back", "legs", "core"],
        260,
        Intermediate,
        &["barbell"],
        true,
    ),
    exercise(
        "Bench Press",
        Strength,
        &["chest", "shoulders", "triceps"],
        220,
        Intermediate,
        &["barbell", "bench"],
        true,
    ),
    exercise(
        "Pull-ups",
        Strength,
        &["back", "biceps", "core"],
        240,
        Intermediate,
        &["pull-up bar"],
        true,
    ),
    exercise(
        "Dumbbell Lunges",
        Strength,
        &["legs", "glutes"],
        230,
        Beginner,
        &["dumbbells"],
        true,
    ),
    exercise(
        "Kettlebell Swings",
        Strength,
        &["full body"],
        350,
        Intermediate,
        &["kettlebell"],
        true,
    ),
    exercise(
        "Push-up Variations",
        Strength,
        &["chest", "triceps", "core"],
        200,
        Beginner,
        &[],
        true,
    ),
    exercise(
        "Overhead Press",
        Strength,
        &["shoulders", "triceps"],
        210,
        Intermediate,
        &["barbell"],
        true,
    ),
    exercise(
        "Resistance Band Training",
        Strength,
        &["full body"],
        180,
        Beginner,
        &["resistance bands"],
        true,
    ),
    exercise(
        "Turkish Get-up",
        Strength,
        &["full body"],
        200,
        Advanced,
        &["kettlebell"],
        true,
    ),
    // Flexibility
    exercise(
        "Vinyasa Yoga",
        Flexibility,
        &["full body"],
        180,
        Intermediate,
        &["yoga mat"],
        true,
    ),
    exercise(
        "Yin Yoga",
        Flexibility,
        &["full body"],
        100,
        Beginner,
        &["yoga mat"],
        true,
    ),
    exercise(
        "Dynamic Stretching",
        Flexibility,
        &["full body"],
        120,
        Beginner,
        &[],
        true,
    ),
    exercise(
        "Pilates Core",
        Flexibility,
        &["core", "back"],
        200,
        Intermediate,
        &["mat"],
        true,
    ),
    exercise(
        "Foam Rolling Recovery",
        Flexibility,
        &["full body"],
        80,
        Beginner,
        &["foam roller"],
        true,
    ),
    exercise(
        "Tai Chi",
        Flexibility,
        &["full body"],
        150,
        Beginner,
        &[],
        false,
    ),
    // Recovery
    exercise(
        "Meditation Session",
        Recovery,
        &["mind"],
        30,
        Beginner,
        &[],
        true,
    ),
    exercise(
        "Cold Plunge",
        Recovery,
        &["full body"],
        50,
        Intermediate,
        &["cold plunge tub"],
        true,
    ),
    exercise(
        "Sauna Session",
        Recovery,
        &["full body"],
        40,
        Beginner,
        &["sauna access"],
        true,
    ),
    exercise(
        "Sleep Optimization",
        Recovery,
        &["mind"],
        0,
        Beginner,
        &[],
        true,
    ),
];
