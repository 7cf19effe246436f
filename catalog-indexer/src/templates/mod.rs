//! Category templates for the wellness catalog.
//!
//! Templates are immutable, statically defined item definitions. The built-in
//! set is gathered into a [`CatalogTemplates`] value and handed to the
//! assembler at startup; tests can build their own.

mod exercises;
mod extras;
mod gear;
mod goals;
mod meal_plans;
mod supplements;

use std::borrow::Cow;

use catalog_indexer_shared::{Category, Difficulty, Macros};

pub use exercises::EXERCISES;
pub use extras::EXTRAS;
pub use gear::GEAR;
pub use goals::{GLOBAL_GOALS, WEATHER_CONDITIONS};
pub use meal_plans::MEAL_PLANS;
pub use supplements::SUPPLEMENTS;

/// Exercise subcategory. Drives the goal pool an exercise draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseFocus {
    Cardio,
    Strength,
    Flexibility,
    Recovery,
}

impl ExerciseFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseFocus::Cardio => "cardio",
            ExerciseFocus::Strength => "strength",
            ExerciseFocus::Flexibility => "flexibility",
            ExerciseFocus::Recovery => "recovery",
        }
    }

    /// Candidate goals for the focus. Exercises pick two at random.
    pub fn goal_pool(&self) -> &'static [&'static str] {
        match self {
            ExerciseFocus::Cardio => &["weight loss", "endurance", "energy boost", "general fitness"],
            ExerciseFocus::Strength => &[
                "muscle building",
                "strength",
                "body composition",
                "functional fitness",
            ],
            ExerciseFocus::Flexibility => &[
                "flexibility",
                "stress relief",
                "injury recovery",
                "mindfulness",
            ],
            ExerciseFocus::Recovery => &["stress relief", "better sleep", "injury recovery"],
        }
    }
}

/// Supplement subcategory. Each maps to a fixed goal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementKind {
    Protein,
    Performance,
    Recovery,
    Health,
}

impl SupplementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplementKind::Protein => "protein",
            SupplementKind::Performance => "performance",
            SupplementKind::Recovery => "recovery",
            SupplementKind::Health => "health",
        }
    }

    pub fn goals(&self) -> &'static [&'static str] {
        match self {
            SupplementKind::Protein => &["muscle building", "strength"],
            SupplementKind::Performance => &["endurance", "strength", "energy boost"],
            SupplementKind::Recovery => &["injury recovery", "better sleep", "stress relief"],
            SupplementKind::Health => &["general fitness", "energy boost"],
        }
    }
}

/// Build quality of a gear item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    Medium,
    High,
}

impl Durability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Durability::Medium => "medium",
            Durability::High => "high",
        }
    }
}

/// Exercise definition.
///
/// `name` is a `Cow` so name variants ("Advanced Deadlift") can be derived
/// from a static template without leaking.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseTemplate {
    pub name: Cow<'static, str>,
    pub focus: ExerciseFocus,
    pub muscle_groups: &'static [&'static str],
    pub calories_per_30min: u32,
    pub difficulty: Difficulty,
    pub equipment: &'static [&'static str],
    pub indoor: bool,
}

/// Supplement definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplementTemplate {
    pub name: &'static str,
    pub kind: SupplementKind,
    pub benefits: &'static [&'static str],
    pub allergens: &'static [&'static str],
    pub dosage: &'static str,
    pub price_usd: u32,
}

/// Gear definition.
#[derive(Debug, Clone, PartialEq)]
pub struct GearTemplate {
    pub name: &'static str,
    pub subcategory: &'static str,
    pub for_goals: &'static [&'static str],
    pub price_usd: u32,
    pub durability: Durability,
}

/// Meal plan definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanTemplate {
    pub name: &'static str,
    pub subcategory: &'static str,
    pub calories_daily: u32,
    pub macros: Macros,
    pub meals_per_day: u32,
    pub allergens: &'static [&'static str],
    pub diet_type: &'static str,
}

/// Miscellaneous item appended after the templated categories.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraTemplate {
    pub name: &'static str,
    pub category: Category,
    pub subcategory: &'static str,
    pub goals: &'static [&'static str],
}

/// The full set of templates one catalog run is generated from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogTemplates {
    pub exercises: Vec<ExerciseTemplate>,
    pub supplements: Vec<SupplementTemplate>,
    pub gear: Vec<GearTemplate>,
    pub meal_plans: Vec<MealPlanTemplate>,
    pub extras: Vec<ExtraTemplate>,
}

impl CatalogTemplates {
    /// The built-in HealthForge catalog.
    pub fn builtin() -> Self {
        Self {
            exercises: EXERCISES.to_vec(),
            supplements: SUPPLEMENTS.to_vec(),
            gear: GEAR.to_vec(),
            meal_plans: MEAL_PLANS.to_vec(),
            extras: EXTRAS.to_vec(),
        }
    }

    /// Number of templates across all categories.
    pub fn len(&self) -> usize {
        self.exercises.len()
            + self.supplements.len()
            + self.gear.len()
            + self.meal_plans.len()
            + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
