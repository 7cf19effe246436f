//! Goal and weather vocabularies shared by the record builders.

/// Goals a meal plan can be tagged with, beyond its own subcategory.
pub static GLOBAL_GOALS: [&str; 15] = [
    "weight loss",
    "muscle building",
    "endurance",
    "flexibility",
    "stress relief",
    "injury recovery",
    "general fitness",
    "marathon training",
    "strength",
    "body composition",
    "energy boost",
    "better sleep",
    "core strength",
    "functional fitness",
    "mindfulness",
];

/// Weather conditions an outdoor exercise can be suited to.
pub static WEATHER_CONDITIONS: [&str; 3] = ["mild", "cold", "hot"];
