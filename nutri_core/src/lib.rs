#![forbid(unsafe_code)]

//! Core domain model and recommendation logic for NutriVision.
//!
//! This crate provides:
//! - Domain types (profiles, foods, macro targets)
//! - Catalog management
//! - Energy estimation and macro splitting
//! - Food selection and the recommendation engine
//! - Menu text extraction and external recognizer/classifier bridges

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod profile;
pub mod energy;
pub mod macros;
pub mod filter;
pub mod menu;
pub mod classify;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use menu::{extract_menu_items, menu_items_from_image, CommandRecognizer, MenuRecognizer};
pub use classify::{classify_text, CommandClassifier, TextClassifier};
pub use engine::{generate_recommendations, RecommendationEngine};
