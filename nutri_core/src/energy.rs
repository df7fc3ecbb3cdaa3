//! Daily energy estimation.
//!
//! Mifflin-St Jeor basal metabolic rate, shifted by a fixed goal adjustment.

use crate::{Gender, Goal, Profile};

/// Calorie surplus or deficit applied for non-maintenance goals
pub const GOAL_ADJUSTMENT_KCAL: f64 = 300.0;

/// Basal metabolic rate in kcal/day
///
/// `10*weight + 6.25*height - 5*age + 5` for males, `- 161` otherwise.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::FatLoss => -GOAL_ADJUSTMENT_KCAL,
        Goal::MuscleGain => GOAL_ADJUSTMENT_KCAL,
        Goal::Maintain => 0.0,
    }
}

/// Goal-adjusted daily energy before any rounding
pub fn daily_energy(profile: &Profile) -> f64 {
    basal_metabolic_rate(profile) + goal_adjustment(profile.goal)
}

/// Daily calorie target, truncated toward zero
pub fn estimate(profile: &Profile) -> i32 {
    daily_energy(profile).trunc() as i32
}
