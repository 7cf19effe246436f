//! Built-in meal plan templates.

use catalog_indexer_shared::Macros;

use super::MealPlanTemplate;

const fn grams(protein_g: u32, carbs_g: u32, fat_g: u32) -> Macros {
    Macros {
        protein_g,
        carbs_g,
        fat_g,
    }
}

pub static MEAL_PLANS: &[MealPlanTemplate] = &[
    MealPlanTemplate {
        name: "High Protein Muscle Builder",
        subcategory: "muscle building",
        calories_daily: 2800,
        macros: grams(180, 300, 80),
        meals_per_day: 5,
        allergens: &["dairy", "eggs"],
        diet_type: "omnivore",
    },
    MealPlanTemplate {
        name: "Lean Cut Fat Loss",
        subcategory: "weight loss",
        calories_daily: 1800,
        macros: grams(150, 150, 60),
        meals_per_day: 4,
        allergens: &[],
        diet_type: "omnivore",
    },
    MealPlanTemplate {
        name: "Vegan Power Plan",
        subcategory: "muscle building",
        calories_daily: 2600,
        macros: grams(140, 350, 75),
        meals_per_day: 5,
        allergens: &["soy", "nuts"],
        diet_type: "vegan",
    },
    MealPlanTemplate {
        name: "Keto Endurance Fuel",
        subcategory: "endurance",
        calories_daily: 2200,
        macros: grams(130, 30, 170),
        meals_per_day: 3,
        allergens: &["dairy", "eggs"],
        diet_type: "keto",
    },
    MealPlanTemplate {
        name: "Mediterranean Balance",
        subcategory: "general health",
        calories_daily: 2200,
        macros: grams(100, 250, 90),
        meals_per_day: 3,
        allergens: &["fish", "nuts"],
        diet_type: "mediterranean",
    },
    MealPlanTemplate {
        name: "Intermittent Fasting 16:8",
        subcategory: "weight loss",
        calories_daily: 2000,
        macros: grams(120, 200, 80),
        meals_per_day: 2,
        allergens: &[],
        diet_type: "flexible",
    },
    MealPlanTemplate {
        name: "Marathon Training Fuel",
        subcategory: "endurance",
        calories_daily: 3200,
        macros: grams(120, 450, 80),
        meals_per_day: 6,
        allergens: &[],
        diet_type: "omnivore",
    },
    MealPlanTemplate {
        name: "Anti-Inflammatory Plan",
        subcategory: "recovery",
        calories_daily: 2000,
        macros: grams(100, 220, 80),
        meals_per_day: 4,
        allergens: &[],
        diet_type: "pescatarian",
    },
    MealPlanTemplate {
        name: "Gluten-Free Athletic",
        subcategory: "general health",
        calories_daily: 2400,
        macros: grams(140, 280, 75),
        meals_per_day: 4,
        allergens: &["dairy"],
        diet_type: "gluten-free",
    },
    MealPlanTemplate {
        name: "Plant-Based Beginner",
        subcategory: "general health",
        calories_daily: 2000,
        macros: grams(80, 280, 70),
        meals_per_day: 3,
        allergens: &["soy"],
        diet_type: "vegetarian",
    },
    MealPlanTemplate {
        name: "Bodybuilder Bulk Phase",
        subcategory: "muscle building",
        calories_daily: 3500,
        macros: grams(220, 400, 100),
        meals_per_day: 6,
        allergens: &["dairy", "eggs"],
        diet_type: "omnivore",
    },
    MealPlanTemplate {
        name: "Senior Vitality Plan",
        subcategory: "general health",
        calories_daily: 1800,
        macros: grams(90, 200, 70),
        meals_per_day: 3,
        allergens: &[],
        diet_type: "omnivore",
    },
];
