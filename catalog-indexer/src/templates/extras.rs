//! Miscellaneous items appended after the templated categories.

use catalog_indexer_shared::Category;

use super::ExtraTemplate;

pub static EXTRAS: &[ExtraTemplate] = &[
    ExtraTemplate {
        name: "5-Minute Breathing Exercise",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["stress relief", "mindfulness"],
    },
    ExtraTemplate {
        name: "Gratitude Journaling",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["mindfulness", "better sleep"],
    },
    ExtraTemplate {
        name: "Progressive Muscle Relaxation",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["stress relief", "better sleep"],
    },
    ExtraTemplate {
        name: "Walking Meditation",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["mindfulness", "stress relief"],
    },
    ExtraTemplate {
        name: "Body Scan Meditation",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["stress relief", "mindfulness", "better sleep"],
    },
    ExtraTemplate {
        name: "Power Nap Protocol",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["energy boost", "recovery"],
    },
    ExtraTemplate {
        name: "Cold Shower Protocol",
        category: Category::Exercise,
        subcategory: "recovery",
        goals: &["energy boost", "immune support"],
    },
    ExtraTemplate {
        name: "Hydration Tracker",
        category: Category::Gear,
        subcategory: "tech",
        goals: &["general fitness", "energy boost"],
    },
    ExtraTemplate {
        name: "Posture Corrector Band",
        category: Category::Gear,
        subcategory: "recovery",
        goals: &["injury prevention", "core strength"],
    },
    ExtraTemplate {
        name: "Balance Board",
        category: Category::Gear,
        subcategory: "bodyweight",
        goals: &["balance", "core strength", "functional fitness"],
    },
];
