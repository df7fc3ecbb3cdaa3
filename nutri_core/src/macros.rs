//! Macronutrient split by goal and conversion to grams.

use crate::{Goal, MacroGrams, MacroSplit};

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Fixed fraction of calories per macronutrient for a goal
pub fn split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::MuscleGain => MacroSplit {
            protein: 0.35,
            fat: 0.25,
            carbs: 0.40,
        },
        Goal::FatLoss => MacroSplit {
            protein: 0.40,
            fat: 0.30,
            carbs: 0.30,
        },
        Goal::Maintain => MacroSplit {
            protein: 0.30,
            fat: 0.25,
            carbs: 0.45,
        },
    }
}

/// Convert a calorie budget into grams per macronutrient
///
/// Each value is rounded half-up on its own. The grams are not renormalized,
/// so re-adding them may miss `calories` by a few kcal.
pub fn grams_from(calories: f64, split: MacroSplit) -> MacroGrams {
    MacroGrams {
        protein: round_half_up(split.protein * calories / PROTEIN_KCAL_PER_GRAM),
        fat: round_half_up(split.fat * calories / FAT_KCAL_PER_GRAM),
        carbs: round_half_up(split.carbs * calories / CARBS_KCAL_PER_GRAM),
    }
}

/// Calories implied by a set of gram targets
pub fn calories_of(grams: MacroGrams) -> i32 {
    grams.protein * PROTEIN_KCAL_PER_GRAM as i32
        + grams.fat * FAT_KCAL_PER_GRAM as i32
        + grams.carbs * CARBS_KCAL_PER_GRAM as i32
}

// Inputs are non-negative for every profile the collector accepts.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
