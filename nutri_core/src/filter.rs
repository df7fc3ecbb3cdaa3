//! Food selection over the catalog.
//!
//! Filters run in a fixed order and never reorder entries:
//! 1. Diet must match exactly
//! 2. Region must match or be "any" on the food; skipped when the profile
//!    has no region
//! 3. Meal must match unless the profile asks for any meal
//! 4. Entries tagged with an active disease keyword are dropped
//! 5. The goal label must appear inside the joined tag string
//! 6. Menu items narrow the list, unless that would empty it
//! 7. An empty result falls back to the head of the catalog

use crate::{Catalog, Disease, FoodEntry, MenuItemSet, Profile, Region};
use std::collections::BTreeSet;

/// Number of catalog entries returned when every filter misses
pub const FALLBACK_COUNT: usize = 3;

/// Select foods for a profile, in catalog order
///
/// Never returns an empty list for a non-empty catalog.
pub fn select(catalog: &Catalog, profile: &Profile, menu_items: &MenuItemSet) -> Vec<FoodEntry> {
    let disease_keyword = disease_keyword(&profile.diseases);
    let goal_label = profile.goal.label().to_lowercase();

    let filtered: Vec<&FoodEntry> = catalog
        .foods
        .iter()
        .filter(|f| f.diet == profile.diet)
        .filter(|f| region_matches(f, profile.region))
        .filter(|f| profile.meal_time.meal().map_or(true, |meal| f.meal == meal))
        .filter(|f| !has_disease_tag(f, disease_keyword.as_deref()))
        .filter(|f| joined_tags(f).contains(&goal_label))
        .collect();

    tracing::debug!(
        "{} of {} foods passed profile filters",
        filtered.len(),
        catalog.foods.len()
    );

    let filtered = narrow_to_menu(filtered, menu_items);

    if filtered.is_empty() {
        tracing::info!(
            "No foods matched the profile, falling back to the first {} catalog entries",
            FALLBACK_COUNT
        );
        return catalog.foods.iter().take(FALLBACK_COUNT).cloned().collect();
    }

    filtered.into_iter().cloned().collect()
}

/// A profile region of `Any` is literal: only region-agnostic foods match it
fn region_matches(food: &FoodEntry, wanted: Option<Region>) -> bool {
    match wanted {
        None => true,
        Some(region) => food.region == Region::Any || food.region == region,
    }
}

/// The space-joined flag string a tag must equal to exclude its food
///
/// With two flags active this is "diabetes hypertension", so a lone
/// "diabetes" tag does not match.
fn disease_keyword(diseases: &BTreeSet<Disease>) -> Option<String> {
    if diseases.is_empty() {
        return None;
    }

    Some(
        diseases
            .iter()
            .map(Disease::keyword)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn has_disease_tag(food: &FoodEntry, keyword: Option<&str>) -> bool {
    keyword.map_or(false, |k| {
        food.tags.iter().any(|tag| tag.trim().to_lowercase() == k)
    })
}

fn joined_tags(food: &FoodEntry) -> String {
    food.tags.join(" ").to_lowercase()
}

/// Keep entries whose name contains a menu item; advisory only
fn narrow_to_menu<'a>(filtered: Vec<&'a FoodEntry>, menu_items: &MenuItemSet) -> Vec<&'a FoodEntry> {
    if menu_items.is_empty() {
        return filtered;
    }

    let narrowed: Vec<&FoodEntry> = filtered
        .iter()
        .copied()
        .filter(|f| {
            let name = f.name.to_lowercase();
            menu_items.iter().any(|item| name.contains(item.as_str()))
        })
        .collect();

    if narrowed.is_empty() {
        tracing::debug!("No filtered food appears on the menu, ignoring menu items");
        filtered
    } else {
        tracing::debug!("Menu narrowed {} foods to {}", filtered.len(), narrowed.len());
        narrowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, DietType, Gender, Goal, Meal, MealTime};

    fn profile(diet: DietType, goal: Goal) -> Profile {
        Profile {
            age: 30,
            gender: Gender::Male,
            weight_kg: 70.0,
            height_cm: 175.0,
            diet,
            region: None,
            diseases: BTreeSet::new(),
            meal_time: MealTime::Any,
            goal,
        }
    }

    fn names(foods: &[FoodEntry]) -> Vec<&str> {
        foods.iter().map(|f| f.name.as_str()).collect()
    }

    fn menu(items: &[&str]) -> MenuItemSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// A catalog whose tags carry goal labels, so filters other than the
    /// goal test can be observed
    fn tagged_catalog() -> Catalog {
        fn entry(name: &str, region: Region, diet: DietType, meal: Meal, tags: &[&str]) -> FoodEntry {
            FoodEntry {
                name: name.into(),
                region,
                diet,
                meal,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            }
        }

        Catalog {
            foods: vec![
                entry(
                    "Rajma Chawal",
                    Region::NorthIndian,
                    DietType::Vegetarian,
                    Meal::Lunch,
                    &["muscle gain", "protein"],
                ),
                entry(
                    "Sweet Pongal",
                    Region::SouthIndian,
                    DietType::Vegetarian,
                    Meal::Breakfast,
                    &["muscle gain", "diabetes"],
                ),
                entry(
                    "Pickled Salad",
                    Region::Any,
                    DietType::Vegetarian,
                    Meal::Dinner,
                    &["muscle gain", "hypertension"],
                ),
                entry(
                    "Soya Chunks Curry",
                    Region::Any,
                    DietType::Vegetarian,
                    Meal::Dinner,
                    &["muscle gain"],
                ),
                entry(
                    "Chicken Tikka",
                    Region::NorthIndian,
                    DietType::NonVegetarian,
                    Meal::Dinner,
                    &["muscle gain"],
                ),
            ],
        }
    }

    #[test]
    fn test_fat_loss_vegetarian_without_region_finds_quinoa() {
        let catalog = build_default_catalog();
        let foods = select(&catalog, &profile(DietType::Vegetarian, Goal::FatLoss), &menu(&[]));
        assert_eq!(names(&foods), vec!["Quinoa Salad"]);
    }

    #[test]
    fn test_any_region_excludes_continental_quinoa() {
        // Quinoa Salad is Continental, so a literal "Any" region rules it out
        // and the fallback applies.
        let catalog = build_default_catalog();
        let mut p = profile(DietType::Vegetarian, Goal::FatLoss);
        p.gender = Gender::Female;
        p.region = Some(Region::Any);
        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(
            names(&foods),
            vec!["Grilled Chicken", "Paneer Tikka", "Mixed Veg Khichdi"]
        );
    }

    #[test]
    fn test_goal_uses_label_substring() {
        // "muscle gain" is not contained in "muscle protein", so the default
        // catalog has no muscle-gain match and falls back.
        let catalog = build_default_catalog();
        let foods = select(
            &catalog,
            &profile(DietType::Vegetarian, Goal::MuscleGain),
            &menu(&[]),
        );
        assert_eq!(
            names(&foods),
            vec!["Grilled Chicken", "Paneer Tikka", "Mixed Veg Khichdi"]
        );
    }

    #[test]
    fn test_goal_substring_spans_tag_boundaries() {
        let catalog = Catalog {
            foods: vec![FoodEntry {
                name: "Lentil Bowl".into(),
                region: Region::Any,
                diet: DietType::Vegetarian,
                meal: Meal::Lunch,
                tags: vec!["lean".into(), "fat".into(), "loss".into()],
            }],
        };
        let foods = select(&catalog, &profile(DietType::Vegetarian, Goal::FatLoss), &menu(&[]));
        assert_eq!(names(&foods), vec!["Lentil Bowl"]);
    }

    #[test]
    fn test_diet_filter_is_exact() {
        let catalog = tagged_catalog();
        let foods = select(
            &catalog,
            &profile(DietType::NonVegetarian, Goal::MuscleGain),
            &menu(&[]),
        );
        assert_eq!(names(&foods), vec!["Chicken Tikka"]);
    }

    #[test]
    fn test_region_keeps_any_entries() {
        let catalog = tagged_catalog();
        let mut p = profile(DietType::Vegetarian, Goal::MuscleGain);
        p.region = Some(Region::SouthIndian);
        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(
            names(&foods),
            vec!["Sweet Pongal", "Pickled Salad", "Soya Chunks Curry"]
        );
    }

    #[test]
    fn test_unset_region_skips_filter() {
        let catalog = tagged_catalog();
        let foods = select(
            &catalog,
            &profile(DietType::Vegetarian, Goal::MuscleGain),
            &menu(&[]),
        );
        assert_eq!(
            names(&foods),
            vec!["Rajma Chawal", "Sweet Pongal", "Pickled Salad", "Soya Chunks Curry"]
        );
    }

    #[test]
    fn test_any_region_keeps_only_region_agnostic_foods() {
        let catalog = tagged_catalog();
        let mut p = profile(DietType::Vegetarian, Goal::MuscleGain);
        p.region = Some(Region::Any);
        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(names(&foods), vec!["Pickled Salad", "Soya Chunks Curry"]);
    }

    #[test]
    fn test_meal_filter() {
        let catalog = tagged_catalog();
        let mut p = profile(DietType::Vegetarian, Goal::MuscleGain);
        p.meal_time = MealTime::Dinner;
        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(names(&foods), vec!["Pickled Salad", "Soya Chunks Curry"]);
    }

    #[test]
    fn test_single_disease_excludes_tagged_food() {
        let catalog = tagged_catalog();
        let mut p = profile(DietType::Vegetarian, Goal::MuscleGain);
        p.diseases.insert(Disease::Diabetes);
        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(
            names(&foods),
            vec!["Rajma Chawal", "Pickled Salad", "Soya Chunks Curry"]
        );
    }

    #[test]
    fn test_multiple_diseases_keep_single_flag_tags() {
        let catalog = tagged_catalog();
        let mut p = profile(DietType::Vegetarian, Goal::MuscleGain);
        p.diseases.insert(Disease::Diabetes);
        p.diseases.insert(Disease::Hypertension);
        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(
            names(&foods),
            vec!["Rajma Chawal", "Sweet Pongal", "Pickled Salad", "Soya Chunks Curry"]
        );
    }

    #[test]
    fn test_multiple_diseases_match_joined_tag() {
        let catalog = Catalog {
            foods: vec![
                FoodEntry {
                    name: "Filler".into(),
                    region: Region::Any,
                    diet: DietType::NonVegetarian,
                    meal: Meal::Lunch,
                    tags: vec!["fat loss".into()],
                },
                FoodEntry {
                    name: "Sweet Pongal".into(),
                    region: Region::Any,
                    diet: DietType::Vegetarian,
                    meal: Meal::Breakfast,
                    tags: vec!["fat loss".into(), "diabetes".into()],
                },
                FoodEntry {
                    name: "Pickle Platter".into(),
                    region: Region::Any,
                    diet: DietType::Vegetarian,
                    meal: Meal::Dinner,
                    tags: vec!["fat loss".into(), "Diabetes Hypertension".into()],
                },
            ],
        };
        let mut p = profile(DietType::Vegetarian, Goal::FatLoss);
        p.diseases.insert(Disease::Hypertension);
        p.diseases.insert(Disease::Diabetes);

        let foods = select(&catalog, &p, &menu(&[]));
        assert_eq!(names(&foods), vec!["Sweet Pongal"]);
    }

    #[test]
    fn test_disease_keyword_is_joined_string() {
        let diseases: BTreeSet<_> = [Disease::Hypertension, Disease::Diabetes].into_iter().collect();
        assert_eq!(
            disease_keyword(&diseases).as_deref(),
            Some("diabetes hypertension")
        );
        assert_eq!(
            disease_keyword(&[Disease::Diabetes].into_iter().collect()).as_deref(),
            Some("diabetes")
        );
        assert!(disease_keyword(&BTreeSet::new()).is_none());
    }

    #[test]
    fn test_menu_narrows_filtered_list() {
        let catalog = tagged_catalog();
        let foods = select(
            &catalog,
            &profile(DietType::Vegetarian, Goal::MuscleGain),
            &menu(&["soya", "pongal"]),
        );
        assert_eq!(names(&foods), vec!["Sweet Pongal", "Soya Chunks Curry"]);
    }

    #[test]
    fn test_menu_without_matches_is_ignored() {
        let catalog = tagged_catalog();
        let p = profile(DietType::Vegetarian, Goal::MuscleGain);
        let without = select(&catalog, &p, &menu(&[]));
        let with = select(&catalog, &p, &menu(&["pizza", "burger"]));
        assert_eq!(with, without);
    }

    #[test]
    fn test_menu_cannot_add_filtered_out_foods() {
        let catalog = tagged_catalog();
        let foods = select(
            &catalog,
            &profile(DietType::Vegetarian, Goal::MuscleGain),
            &menu(&["chicken", "rajma"]),
        );
        assert_eq!(names(&foods), vec!["Rajma Chawal"]);
    }

    #[test]
    fn test_never_empty_for_non_empty_catalog() {
        let catalog = build_default_catalog();
        for diet in [DietType::Vegetarian, DietType::NonVegetarian] {
            for goal in [Goal::Maintain, Goal::FatLoss, Goal::MuscleGain] {
                for meal_time in [MealTime::Any, MealTime::Breakfast, MealTime::Lunch, MealTime::Dinner] {
                    let mut p = profile(diet, goal);
                    p.meal_time = meal_time;
                    p.region = Some(Region::Chinese);
                    assert!(!select(&catalog, &p, &menu(&["idli"])).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_fallback_on_small_catalog() {
        let mut catalog = tagged_catalog();
        catalog.foods.truncate(2);
        let foods = select(&catalog, &profile(DietType::NonVegetarian, Goal::FatLoss), &menu(&[]));
        assert_eq!(names(&foods), vec!["Rajma Chawal", "Sweet Pongal"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty() {
        let foods = select(
            &Catalog::default(),
            &profile(DietType::Vegetarian, Goal::Maintain),
            &menu(&[]),
        );
        assert!(foods.is_empty());
    }

    #[test]
    fn test_selection_is_deterministic() {
        crate::logging::init_test();
        let catalog = tagged_catalog();
        let p = profile(DietType::Vegetarian, Goal::MuscleGain);
        let items = menu(&["curry", "salad", "rajma"]);
        let first = select(&catalog, &p, &items);
        for _ in 0..10 {
            assert_eq!(select(&catalog, &p, &items), first);
        }
    }
}
