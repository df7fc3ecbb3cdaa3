//! Food catalog: the built-in list and optional file-based replacement.
//!
//! Catalog order is significant. Filtering preserves it and the empty-result
//! fallback takes the first entries.

use crate::types::*;
use crate::{Config, Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and shared read-only
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn food(name: &str, region: Region, diet: DietType, meal: Meal, tags: &[&str]) -> FoodEntry {
    FoodEntry {
        name: name.into(),
        region,
        diet,
        meal,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
    }
}

fn build_default_catalog_internal() -> Catalog {
    use DietType::{NonVegetarian, Vegetarian};

    let foods = vec![
        food(
            "Grilled Chicken",
            Region::NorthIndian,
            NonVegetarian,
            Meal::Lunch,
            &["muscle", "protein"],
        ),
        food(
            "Paneer Tikka",
            Region::NorthIndian,
            Vegetarian,
            Meal::Dinner,
            &["protein", "muscle"],
        ),
        food(
            "Mixed Veg Khichdi",
            Region::SouthIndian,
            Vegetarian,
            Meal::Dinner,
            &["fiber", "light"],
        ),
        food(
            "Quinoa Salad",
            Region::Continental,
            Vegetarian,
            Meal::Lunch,
            &["fat loss", "fiber"],
        ),
        food(
            "Boiled Eggs",
            Region::Any,
            NonVegetarian,
            Meal::Breakfast,
            &["protein"],
        ),
        food(
            "Oats with Milk",
            Region::Any,
            Vegetarian,
            Meal::Breakfast,
            &["carbs", "fiber"],
        ),
        food(
            "Grilled Fish",
            Region::Any,
            NonVegetarian,
            Meal::Dinner,
            &["omega", "muscle"],
        ),
        food(
            "Tofu Stir Fry",
            Region::Chinese,
            Vegetarian,
            Meal::Lunch,
            &["muscle", "vegan"],
        ),
    ];

    Catalog { foods }
}

impl Catalog {
    /// Load the catalog named by the configuration, or the built-in one
    pub fn load(config: &Config) -> Result<Self> {
        match &config.catalog.path {
            Some(path) => Self::load_from(path),
            None => Ok(get_default_catalog().clone()),
        }
    }

    /// Load a catalog from a TOML file containing a `[[foods]]` array
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog: Catalog = toml::from_str(&contents)?;
        tracing::info!("Loaded {} foods from {:?}", catalog.foods.len(), path);
        Ok(catalog)
    }

    /// Load a catalog and reject it if validation fails
    pub fn load_validated(config: &Config) -> Result<Self> {
        let catalog = Self::load(config)?;
        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors));
        }
        Ok(catalog)
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.foods.is_empty() {
            errors.push("Catalog has no foods".to_string());
        }

        let mut seen = HashSet::new();
        for (idx, entry) in self.foods.iter().enumerate() {
            let name = entry.name.trim();
            if name.is_empty() {
                errors.push(format!("Food #{} has empty name", idx + 1));
                continue;
            }
            if !seen.insert(name.to_lowercase()) {
                errors.push(format!("Duplicate food name '{}'", name));
            }
            if entry.tags.iter().any(|t| t.trim().is_empty()) {
                errors.push(format!("Food '{}' has an empty tag", name));
            }
        }

        errors
    }
}
