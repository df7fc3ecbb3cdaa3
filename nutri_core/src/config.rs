//! Configuration file support for NutriVision.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/nutrivision/config.toml`.

use crate::classify::DEFAULT_THRESHOLD;
use crate::menu::IMAGE_PLACEHOLDER;
use crate::{DietType, Disease, Error, Gender, Goal, MealTime, Profile, Region, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub recognizer: RecognizerConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Profile values used when the command line leaves them out
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_age")]
    pub age: u32,

    #[serde(default = "default_gender")]
    pub gender: Gender,

    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_height_cm")]
    pub height_cm: f64,

    #[serde(default = "default_diet")]
    pub diet: DietType,

    /// Defaults to the form's "Any"; the CLI's `--no-region` clears it
    #[serde(default = "default_region")]
    pub region: Option<Region>,

    #[serde(default)]
    pub diseases: Vec<Disease>,

    #[serde(default)]
    pub meal_time: MealTime,

    #[serde(default)]
    pub goal: Goal,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            age: default_age(),
            gender: default_gender(),
            weight_kg: default_weight_kg(),
            height_cm: default_height_cm(),
            diet: default_diet(),
            region: default_region(),
            diseases: Vec::new(),
            meal_time: MealTime::default(),
            goal: Goal::default(),
        }
    }
}

impl ProfileConfig {
    pub fn to_profile(&self) -> Profile {
        Profile {
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            diet: self.diet,
            region: self.region,
            diseases: self.diseases.iter().copied().collect(),
            meal_time: self.meal_time,
            goal: self.goal,
        }
    }
}

/// Catalog source configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// TOML file replacing the built-in catalog
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Menu image recognizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecognizerConfig {
    #[serde(default = "default_recognizer_command")]
    pub command: Vec<String>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            command: default_recognizer_command(),
        }
    }
}

/// Zero-shot text classifier configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassifierConfig {
    #[serde(default)]
    pub command: Option<Vec<String>>,

    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            command: None,
            threshold: default_threshold(),
        }
    }
}

// Default value functions
fn default_age() -> u32 {
    25
}

fn default_gender() -> Gender {
    Gender::Male
}

fn default_weight_kg() -> f64 {
    60.0
}

fn default_height_cm() -> f64 {
    165.0
}

fn default_diet() -> DietType {
    DietType::Vegetarian
}

fn default_region() -> Option<Region> {
    Some(Region::Any)
}

fn default_recognizer_command() -> Vec<String> {
    vec!["tesseract".into(), IMAGE_PLACEHOLDER.into(), "stdout".into()]
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.check()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("nutrivision").join("config.toml"))
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.recognizer.command.is_empty() {
            return Err(Error::Config("recognizer.command must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.classifier.threshold) {
            return Err(Error::Config(format!(
                "classifier.threshold {} must be within 0..=1",
                self.classifier.threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.profile.age, 25);
        assert_eq!(config.profile.weight_kg, 60.0);
        assert_eq!(config.profile.height_cm, 165.0);
        assert_eq!(config.profile.goal, Goal::Maintain);
        assert_eq!(config.profile.region, Some(Region::Any));
        assert!(config.catalog.path.is_none());
        assert_eq!(config.recognizer.command[0], "tesseract");
        assert_eq!(config.classifier.threshold, 0.5);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.profile.diseases = vec![Disease::Hypertension];
        config.classifier.command = Some(vec!["zero-shot".into(), "{text}".into()]);

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.profile.diseases, vec![Disease::Hypertension]);
        assert_eq!(parsed.classifier.command, config.classifier.command);
        assert_eq!(parsed.recognizer.command, config.recognizer.command);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[profile]
gender = "female"
region = "south-indian"
goal = "fat-loss"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.gender, Gender::Female);
        assert_eq!(config.profile.region, Some(Region::SouthIndian));
        assert_eq!(config.profile.goal, Goal::FatLoss);
        assert_eq!(config.profile.age, 25); // default
    }

    #[test]
    fn test_to_profile_deduplicates_diseases() {
        let mut profile_config = ProfileConfig::default();
        profile_config.diseases = vec![Disease::Diabetes, Disease::Diabetes];
        let profile = profile_config.to_profile();
        assert_eq!(profile.diseases.len(), 1);
        assert_eq!(profile.age, 25);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profile.age = 41;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.profile.age, 41);
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[classifier]\nthreshold = 1.5\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
