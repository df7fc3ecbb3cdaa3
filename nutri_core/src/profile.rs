//! Profile range checks performed by input collectors.
//!
//! The recommendation engine never calls these; it trusts its input.

use crate::{Error, Profile, Result};
use std::ops::RangeInclusive;

pub const AGE_RANGE: RangeInclusive<u32> = 10..=100;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=150.0;
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 100.0..=220.0;

impl Profile {
    /// Check biometric values against the collector's bounds
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !AGE_RANGE.contains(&self.age) {
            errors.push(format!(
                "age {} outside {}..={}",
                self.age,
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ));
        }
        if !WEIGHT_KG_RANGE.contains(&self.weight_kg) {
            errors.push(format!(
                "weight {} kg outside {}..={}",
                self.weight_kg,
                WEIGHT_KG_RANGE.start(),
                WEIGHT_KG_RANGE.end()
            ));
        }
        if !HEIGHT_CM_RANGE.contains(&self.height_cm) {
            errors.push(format!(
                "height {} cm outside {}..={}",
                self.height_cm,
                HEIGHT_CM_RANGE.start(),
                HEIGHT_CM_RANGE.end()
            ));
        }

        errors
    }

    /// Like `validate`, but folds the problems into a single error
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidProfile(errors.join("; ")))
        }
    }
}
