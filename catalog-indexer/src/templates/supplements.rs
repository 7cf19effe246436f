//! Built-in supplement templates.

use super::{SupplementKind, SupplementTemplate};

use SupplementKind::{Health, Performance, Protein, Recovery};

pub static SUPPLEMENTS: &[SupplementTemplate] = &[
    SupplementTemplate {
        name: "Whey Protein Isolate",
        kind: Protein,
        benefits: &["muscle recovery", "lean muscle growth"],
        allergens: &["dairy"],
        dosage: "25g post-workout",
        price_usd: 35,
    },
    SupplementTemplate {
        name: "Plant-Based Protein Blend",
        kind: Protein,
        benefits: &["muscle recovery", "vegan-friendly"],
        allergens: &["soy"],
        dosage: "30g post-workout",
        price_usd: 40,
    },
    SupplementTemplate {
        name: "Creatine Monohydrate",
        kind: Performance,
        benefits: &["strength gains", "power output", "muscle volume"],
        allergens: &[],
        dosage: "5g daily",
        price_usd: 25,
    },
    SupplementTemplate {
        name: "Omega-3 Fish Oil",
        kind: Health,
        benefits: &["heart health", "inflammation reduction", "joint support"],
        allergens: &["fish"],
        dosage: "2g daily",
        price_usd: 20,
    },
    SupplementTemplate {
        name: "Vitamin D3+K2",
        kind: Health,
        benefits: &["bone density", "immune support", "mood"],
        allergens: &[],
        dosage: "5000 IU daily",
        price_usd: 15,
    },
    SupplementTemplate {
        name: "Magnesium Glycinate",
        kind: Recovery,
        benefits: &["sleep quality", "muscle relaxation", "stress reduction"],
        allergens: &[],
        dosage: "400mg before bed",
        price_usd: 18,
    },
    SupplementTemplate {
        name: "BCAA Complex",
        kind: Performance,
        benefits: &["muscle preservation", "endurance", "recovery"],
        allergens: &[],
        dosage: "10g during workout",
        price_usd: 28,
    },
    SupplementTemplate {
        name: "Pre-Workout Energizer",
        kind: Performance,
        benefits: &["energy", "focus", "pump"],
        allergens: &[],
        dosage: "1 scoop 30min pre-workout",
        price_usd: 32,
    },
    SupplementTemplate {
        name: "Collagen Peptides",
        kind: Recovery,
        benefits: &["joint health", "skin elasticity", "gut health"],
        allergens: &[],
        dosage: "10g daily",
        price_usd: 30,
    },
    SupplementTemplate {
        name: "Ashwagandha Extract",
        kind: Health,
        benefits: &["stress reduction", "cortisol control", "energy"],
        allergens: &[],
        dosage: "600mg daily",
        price_usd: 22,
    },
    SupplementTemplate {
        name: "Zinc + Selenium",
        kind: Health,
        benefits: &["immune support", "testosterone support", "antioxidant"],
        allergens: &[],
        dosage: "30mg zinc daily",
        price_usd: 12,
    },
    SupplementTemplate {
        name: "Turmeric Curcumin",
        kind: Health,
        benefits: &["anti-inflammatory", "joint support", "antioxidant"],
        allergens: &[],
        dosage: "1000mg daily",
        price_usd: 18,
    },
    SupplementTemplate {
        name: "L-Glutamine",
        kind: Recovery,
        benefits: &["gut health", "immune support", "muscle recovery"],
        allergens: &[],
        dosage: "5g post-workout",
        price_usd: 20,
    },
    SupplementTemplate {
        name: "Melatonin + L-Theanine",
        kind: Recovery,
        benefits: &["sleep onset", "sleep quality", "relaxation"],
        allergens: &[],
        dosage: "3mg melatonin before bed",
        price_usd: 15,
    },
    SupplementTemplate {
        name: "Iron + Vitamin C",
        kind: Health,
        benefits: &["energy levels", "oxygen transport", "iron absorption"],
        allergens: &[],
        dosage: "18mg iron daily",
        price_usd: 14,
    },
    SupplementTemplate {
        name: "Electrolyte Mix",
        kind: Performance,
        benefits: &["hydration", "cramping prevention", "endurance"],
        allergens: &[],
        dosage: "1 packet per workout",
        price_usd: 25,
    },
    SupplementTemplate {
        name: "Probiotics 50B CFU",
        kind: Health,
        benefits: &["gut health", "immune function", "nutrient absorption"],
        allergens: &["dairy"],
        dosage: "1 capsule daily",
        price_usd: 28,
    },
    SupplementTemplate {
        name: "Vegan Omega-3 (Algal Oil)",
        kind: Health,
        benefits: &["heart health", "brain function", "vegan-friendly"],
        allergens: &[],
        dosage: "1000mg daily",
        price_usd: 30,
    },
];
