//! Catalog assembly.
//!
//! Runs every template through its builder in a fixed category order and
//! assigns each record a run-unique sequence index:
//!
//! 1. base exercises
//! 2. exercise name variants
//! 3. supplements
//! 4. gear
//! 5. meal plans
//! 6. extras

use std::borrow::Cow;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, instrument};

use catalog_indexer_shared::{Difficulty, WellnessRecord};

use crate::processor::RecordTemplate;
use crate::templates::{CatalogTemplates, ExerciseTemplate};

/// Number of exercise variants added to the catalog by default.
pub const DEFAULT_VARIANT_COUNT: usize = 20;

/// Name prefix applied to a sampled exercise to create a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantPrefix {
    Beginner,
    Advanced,
    Quick,
    Extended,
    Morning,
    Evening,
    Outdoor,
    Home,
}

impl VariantPrefix {
    pub const ALL: [VariantPrefix; 8] = [
        VariantPrefix::Beginner,
        VariantPrefix::Advanced,
        VariantPrefix::Quick,
        VariantPrefix::Extended,
        VariantPrefix::Morning,
        VariantPrefix::Evening,
        VariantPrefix::Outdoor,
        VariantPrefix::Home,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VariantPrefix::Beginner => "Beginner",
            VariantPrefix::Advanced => "Advanced",
            VariantPrefix::Quick => "Quick",
            VariantPrefix::Extended => "Extended",
            VariantPrefix::Morning => "Morning",
            VariantPrefix::Evening => "Evening",
            VariantPrefix::Outdoor => "Outdoor",
            VariantPrefix::Home => "Home",
        }
    }

    /// Difficulty forced onto the variant, if any.
    ///
    /// Only the difficulty changes. `indoor` and the other fields are kept
    /// from the source exercise, so an "Outdoor" variant of an indoor
    /// exercise is still indoor.
    pub fn difficulty_override(&self) -> Option<Difficulty> {
        match self {
            VariantPrefix::Beginner => Some(Difficulty::Beginner),
            VariantPrefix::Advanced => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    /// Derive a renamed copy of `template`.
    pub fn apply(&self, template: &ExerciseTemplate) -> ExerciseTemplate {
        let mut variant = template.clone();
        variant.name = Cow::Owned(format!("{} {}", self.label(), template.name));
        if let Some(difficulty) = self.difficulty_override() {
            variant.difficulty = difficulty;
        }
        variant
    }
}

/// Produces the ordered catalog for one run.
#[derive(Debug, Clone)]
pub struct CatalogAssembler {
    templates: CatalogTemplates,
    variant_count: usize,
}

impl CatalogAssembler {
    pub fn new(templates: CatalogTemplates) -> Self {
        Self {
            templates,
            variant_count: DEFAULT_VARIANT_COUNT,
        }
    }

    pub fn with_variant_count(mut self, variant_count: usize) -> Self {
        self.variant_count = variant_count;
        self
    }

    pub fn templates(&self) -> &CatalogTemplates {
        &self.templates
    }

    /// Number of variants actually produced, capped at the exercise count.
    pub fn effective_variant_count(&self) -> usize {
        self.variant_count.min(self.templates.exercises.len())
    }

    /// Length of the catalog [`assemble`](Self::assemble) returns.
    pub fn expected_len(&self) -> usize {
        self.templates.len() + self.effective_variant_count()
    }

    /// Build the full catalog.
    ///
    /// Sequence indices run from 0 to `expected_len() - 1` in catalog order.
    /// Object IDs are stable across runs for the same templates; everything
    /// random is drawn from `rng`.
    #[instrument(skip(self, rng), fields(templates = self.templates.len()))]
    pub fn assemble<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<WellnessRecord> {
        let mut records = Vec::with_capacity(self.expected_len());

        for template in &self.templates.exercises {
            let index = records.len();
            records.push(template.build(index, rng));
        }

        let sampled: Vec<&ExerciseTemplate> = self
            .templates
            .exercises
            .choose_multiple(rng, self.effective_variant_count())
            .collect();
        for template in sampled {
            let prefix = VariantPrefix::ALL[rng.gen_range(0..VariantPrefix::ALL.len())];
            let variant = prefix.apply(template);
            debug!(name = %variant.name, "Derived exercise variant");
            let index = records.len();
            records.push(variant.build(index, rng));
        }

        append(&mut records, &self.templates.supplements, rng);
        append(&mut records, &self.templates.gear, rng);
        append(&mut records, &self.templates.meal_plans, rng);
        append(&mut records, &self.templates.extras, rng);

        info!(records = records.len(), "Assembled catalog");
        records
    }
}

fn append<T: RecordTemplate, R: Rng + ?Sized>(
    records: &mut Vec<WellnessRecord>,
    templates: &[T],
    rng: &mut R,
) {
    for template in templates {
        let index = records.len();
        records.push(template.build(index, rng));
    }
}
