//! Error types for nutri_core.
//!
//! The engine itself never fails; errors come from loading inputs (config,
//! catalog, menu images) and from the external classifier.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Every problem found in a catalog, in catalog order
    #[error("Catalog validation failed: {}", .0.join("; "))]
    CatalogValidation(Vec<String>),

    /// Profile value outside the accepted ranges or vocabulary
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// The OCR program could not be run or exited unsuccessfully
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// Bad classifier output, or no labels to classify against
    #[error("Classification error: {0}")]
    Classification(String),
}
