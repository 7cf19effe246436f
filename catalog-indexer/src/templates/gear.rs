//! Built-in gear templates.

use super::{Durability, GearTemplate};

use Durability::{High, Medium};

pub static GEAR: &[GearTemplate] = &[
    GearTemplate {
        name: "Adjustable Dumbbell Set (5-52.5 lbs)",
        subcategory: "weights",
        for_goals: &["strength", "muscle building"],
        price_usd: 350,
        durability: High,
    },
    GearTemplate {
        name: "Resistance Band Set (5 levels)",
        subcategory: "bands",
        for_goals: &["strength", "flexibility", "rehabilitation"],
        price_usd: 30,
        durability: Medium,
    },
    GearTemplate {
        name: "Yoga Mat (6mm Eco-Friendly)",
        subcategory: "mats",
        for_goals: &["flexibility", "recovery", "mindfulness"],
        price_usd: 45,
        durability: High,
    },
    GearTemplate {
        name: "Foam Roller (High Density)",
        subcategory: "recovery",
        for_goals: &["recovery", "flexibility", "pain relief"],
        price_usd: 25,
        durability: High,
    },
    GearTemplate {
        name: "Heart Rate Monitor Watch",
        subcategory: "tech",
        for_goals: &["cardio", "weight loss", "endurance"],
        price_usd: 200,
        durability: High,
    },
    GearTemplate {
        name: "Kettlebell (16kg / 35lb)",
        subcategory: "weights",
        for_goals: &["strength", "cardio", "functional fitness"],
        price_usd: 55,
        durability: High,
    },
    GearTemplate {
        name: "Pull-up Bar (Doorframe)",
        subcategory: "bodyweight",
        for_goals: &["strength", "muscle building"],
        price_usd: 35,
        durability: Medium,
    },
    GearTemplate {
        name: "Jump Rope (Speed Rope)",
        subcategory: "cardio",
        for_goals: &["cardio", "coordination", "weight loss"],
        price_usd: 15,
        durability: Medium,
    },
    GearTemplate {
        name: "Massage Gun (Percussion)",
        subcategory: "recovery",
        for_goals: &["recovery", "pain relief"],
        price_usd: 120,
        durability: High,
    },
    GearTemplate {
        name: "Gym Gloves (Padded)",
        subcategory: "accessories",
        for_goals: &["strength", "protection"],
        price_usd: 20,
        durability: Medium,
    },
    GearTemplate {
        name: "Stability Ball (65cm)",
        subcategory: "bodyweight",
        for_goals: &["core strength", "flexibility", "balance"],
        price_usd: 25,
        durability: Medium,
    },
    GearTemplate {
        name: "TRX Suspension Trainer",
        subcategory: "bodyweight",
        for_goals: &["functional fitness", "strength", "flexibility"],
        price_usd: 170,
        durability: High,
    },
    GearTemplate {
        name: "Weighted Vest (20lb)",
        subcategory: "weights",
        for_goals: &["strength", "cardio", "calorie burn"],
        price_usd: 80,
        durability: High,
    },
    GearTemplate {
        name: "Ab Roller Wheel",
        subcategory: "bodyweight",
        for_goals: &["core strength"],
        price_usd: 15,
        durability: High,
    },
    GearTemplate {
        name: "Blender Bottle (28oz)",
        subcategory: "accessories",
        for_goals: &["nutrition", "convenience"],
        price_usd: 12,
        durability: Medium,
    },
    GearTemplate {
        name: "Meal Prep Containers (set of 10)",
        subcategory: "accessories",
        for_goals: &["nutrition", "weight loss", "meal planning"],
        price_usd: 20,
        durability: Medium,
    },
    GearTemplate {
        name: "Running Shoes (Cushioned)",
        subcategory: "footwear",
        for_goals: &["cardio", "running", "joint protection"],
        price_usd: 130,
        durability: Medium,
    },
    GearTemplate {
        name: "Compression Sleeves (Knee)",
        subcategory: "recovery",
        for_goals: &["recovery", "joint support", "injury prevention"],
        price_usd: 25,
        durability: Medium,
    },
    GearTemplate {
        name: "Smart Scale (Body Composition)",
        subcategory: "tech",
        for_goals: &["weight loss", "tracking", "body composition"],
        price_usd: 50,
        durability: High,
    },
    GearTemplate {
        name: "Workout Timer / Interval Clock",
        subcategory: "tech",
        for_goals: &["HIIT", "time management"],
        price_usd: 30,
        durability: High,
    },
];
