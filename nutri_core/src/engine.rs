//! Recommendation engine.
//!
//! Combines the energy estimate, the macro split and food selection into a
//! single `NutritionResult`. The engine performs no validation and never
//! fails: every profile yields a result.

use crate::{energy, filter, macros, Catalog, MenuItemSet, NutritionResult, Profile};

/// Produces recommendations against a fixed catalog
///
/// The catalog is borrowed read-only, so one engine can serve any number
/// of requests.
#[derive(Clone, Copy, Debug)]
pub struct RecommendationEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Compute calorie and macro targets and select matching foods
    pub fn recommend(&self, profile: &Profile, menu_items: &MenuItemSet) -> NutritionResult {
        generate_recommendations(self.catalog, profile, menu_items)
    }
}

/// Compute a recommendation for `profile` from `catalog`
///
/// Macro grams are derived from the unrounded daily energy; the reported
/// calorie figure is truncated.
pub fn generate_recommendations(
    catalog: &Catalog,
    profile: &Profile,
    menu_items: &MenuItemSet,
) -> NutritionResult {
    let energy = energy::daily_energy(profile);
    let calories = energy::estimate(profile);
    let split = macros::split(profile.goal);
    let grams = macros::grams_from(energy, split);

    tracing::info!(
        "Target for {:?}: {} kcal (P {} g / F {} g / C {} g)",
        profile.goal,
        calories,
        grams.protein,
        grams.fat,
        grams.carbs
    );

    let foods = filter::select(catalog, profile, menu_items);

    NutritionResult {
        calories,
        protein: grams.protein,
        fat: grams.fat,
        carbs: grams.carbs,
        foods,
    }
}
