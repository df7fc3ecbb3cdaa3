//! Core domain types for the NutriVision system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Profile attributes (gender, diet, region, meal time, goal, diseases)
//! - Food catalog entries
//! - Macro splits and the computed nutrition result

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Normalize a user-supplied label ("North Indian", "fat_loss") to kebab-case
fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

// ============================================================================
// Profile Attributes
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = Error;

    /// Anything that is not "male" is treated as female, matching the
    /// two-constant Mifflin-St Jeor formula.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            _ => Ok(Gender::Female),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Dietary preference, shared by profiles and catalog entries
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    Vegetarian,
    NonVegetarian,
}

impl FromStr for DietType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "vegetarian" | "veg" => Ok(DietType::Vegetarian),
            "non-vegetarian" | "non-veg" | "nonveg" => Ok(DietType::NonVegetarian),
            other => Err(Error::InvalidProfile(format!("unknown diet type '{}'", other))),
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DietType::Vegetarian => write!(f, "Vegetarian"),
            DietType::NonVegetarian => write!(f, "Non-Vegetarian"),
        }
    }
}

/// Cuisine region
///
/// On a catalog entry `Any` means the food suits every region. On a profile
/// it is a literal choice that only matches `Any` foods; a profile without a
/// region is modelled as `None`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Any,
    NorthIndian,
    SouthIndian,
    Chinese,
    Continental,
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "any" => Ok(Region::Any),
            "north-indian" => Ok(Region::NorthIndian),
            "south-indian" => Ok(Region::SouthIndian),
            "chinese" => Ok(Region::Chinese),
            "continental" => Ok(Region::Continental),
            other => Err(Error::InvalidProfile(format!("unknown region '{}'", other))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::Any => "Any",
            Region::NorthIndian => "North Indian",
            Region::SouthIndian => "South Indian",
            Region::Chinese => "Chinese",
            Region::Continental => "Continental",
        };
        f.write_str(label)
    }
}

/// Health condition that excludes tagged foods
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Disease {
    Diabetes,
    Hypertension,
}

impl Disease {
    /// Lowercase keyword compared against catalog tags
    pub fn keyword(&self) -> &'static str {
        match self {
            Disease::Diabetes => "diabetes",
            Disease::Hypertension => "hypertension",
        }
    }
}

impl FromStr for Disease {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "diabetes" => Ok(Disease::Diabetes),
            "hypertension" => Ok(Disease::Hypertension),
            other => Err(Error::InvalidProfile(format!("unknown disease '{}'", other))),
        }
    }
}

/// Meal slot a catalog entry belongs to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meal::Breakfast => write!(f, "Breakfast"),
            Meal::Lunch => write!(f, "Lunch"),
            Meal::Dinner => write!(f, "Dinner"),
        }
    }
}

/// Meal slot requested by a profile
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MealTime {
    #[default]
    Any,
    Breakfast,
    Lunch,
    Dinner,
}

impl MealTime {
    /// The concrete meal this slot restricts to, or None for `Any`
    pub fn meal(&self) -> Option<Meal> {
        match self {
            MealTime::Any => None,
            MealTime::Breakfast => Some(Meal::Breakfast),
            MealTime::Lunch => Some(Meal::Lunch),
            MealTime::Dinner => Some(Meal::Dinner),
        }
    }
}

impl FromStr for MealTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "" | "any" => Ok(MealTime::Any),
            "breakfast" => Ok(MealTime::Breakfast),
            "lunch" => Ok(MealTime::Lunch),
            "dinner" => Ok(MealTime::Dinner),
            other => Err(Error::InvalidProfile(format!("unknown meal time '{}'", other))),
        }
    }
}

/// Fitness goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    #[default]
    Maintain,
    FatLoss,
    MuscleGain,
}

impl Goal {
    /// Human label; its lowercase form is matched against catalog tags
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Maintain => "Maintain Weight",
            Goal::FatLoss => "Fat Loss",
            Goal::MuscleGain => "Muscle Gain",
        }
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "maintain" | "maintain-weight" => Ok(Goal::Maintain),
            "fat-loss" => Ok(Goal::FatLoss),
            "muscle-gain" => Ok(Goal::MuscleGain),
            other => Err(Error::InvalidProfile(format!("unknown goal '{}'", other))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Profile
// ============================================================================

/// A user's biometric and preference inputs for one request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub diet: DietType,
    /// `None` disables the region filter
    pub region: Option<Region>,
    pub diseases: BTreeSet<Disease>,
    pub meal_time: MealTime,
    pub goal: Goal,
}

/// Deduplicated lowercase menu item names extracted from recognized text
pub type MenuItemSet = BTreeSet<String>;

// ============================================================================
// Catalog Types
// ============================================================================

/// A single food in the catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    pub name: String,
    pub region: Region,
    pub diet: DietType,
    pub meal: Meal,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The ordered list of candidate foods
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
}

// ============================================================================
// Nutrition Types
// ============================================================================

/// Fraction of daily calories assigned to each macronutrient
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// Daily macronutrient targets in grams
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroGrams {
    pub protein: i32,
    pub fat: i32,
    pub carbs: i32,
}

/// The computed recommendation for one profile
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionResult {
    pub calories: i32,
    pub protein: i32,
    pub fat: i32,
    pub carbs: i32,
    pub foods: Vec<FoodEntry>,
}
