use clap::{Args, Parser, Subcommand};
use nutri_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "nutrivision")]
#[command(about = "Personal nutrition targets and diet suggestions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute daily targets and recommend foods (default)
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Text file with recognized menu text
        #[arg(long, conflicts_with = "menu_image")]
        menu_text: Option<PathBuf>,

        /// Menu image to run through the configured recognizer
        #[arg(long)]
        menu_image: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the menu items extracted from text or an image
    Menu {
        /// Text file with recognized menu text
        #[arg(long, conflicts_with = "image", required_unless_present = "image")]
        text: Option<PathBuf>,

        /// Menu image to run through the configured recognizer
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// List the food catalog
    Catalog {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify text with the configured zero-shot classifier
    Classify {
        /// Text to classify
        #[arg(long)]
        text: String,

        /// Candidate label (repeatable)
        #[arg(long = "label", required = true)]
        labels: Vec<String>,
    },
}

/// Profile overrides; anything left out comes from the config file
#[derive(Args, Default)]
struct ProfileArgs {
    /// Age in years (10-100)
    #[arg(long)]
    age: Option<u32>,

    /// male or female
    #[arg(long)]
    gender: Option<Gender>,

    /// Weight in kilograms (30-150)
    #[arg(long)]
    weight: Option<f64>,

    /// Height in centimeters (100-220)
    #[arg(long)]
    height: Option<f64>,

    /// vegetarian or non-vegetarian
    #[arg(long)]
    diet: Option<DietType>,

    /// any, north-indian, south-indian, chinese or continental
    #[arg(long)]
    region: Option<Region>,

    /// Do not filter foods by region
    #[arg(long, conflicts_with = "region")]
    no_region: bool,

    /// diabetes, hypertension or none (repeatable)
    #[arg(long = "disease")]
    diseases: Vec<String>,

    /// any, breakfast, lunch or dinner
    #[arg(long)]
    meal: Option<MealTime>,

    /// maintain, fat-loss or muscle-gain
    #[arg(long)]
    goal: Option<Goal>,
}

impl ProfileArgs {
    fn resolve(&self, config: &Config) -> Result<Profile> {
        let mut profile = config.profile.to_profile();

        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(weight) = self.weight {
            profile.weight_kg = weight;
        }
        if let Some(height) = self.height {
            profile.height_cm = height;
        }
        if let Some(diet) = self.diet {
            profile.diet = diet;
        }
        if let Some(region) = self.region {
            profile.region = Some(region);
        }
        if self.no_region {
            profile.region = None;
        }
        if let Some(meal) = self.meal {
            profile.meal_time = meal;
        }
        if let Some(goal) = self.goal {
            profile.goal = goal;
        }

        if !self.diseases.is_empty() {
            profile.diseases.clear();
            for disease in &self.diseases {
                if disease.trim().eq_ignore_ascii_case("none") {
                    continue;
                }
                profile.diseases.insert(disease.parse()?);
            }
        }

        profile.ensure_valid()?;
        tracing::debug!("Resolved profile: {:?}", profile);
        Ok(profile)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    nutri_core::logging::init_for_cli(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Recommend {
            profile,
            menu_text,
            menu_image,
            json,
        }) => cmd_recommend(
            &config,
            &profile,
            menu_text.as_deref(),
            menu_image.as_deref(),
            json,
        ),
        Some(Commands::Menu { text, image }) => cmd_menu(&config, text.as_deref(), image.as_deref()),
        Some(Commands::Catalog { json }) => cmd_catalog(&config, json),
        Some(Commands::Classify { text, labels }) => cmd_classify(&config, &text, &labels),
        None => {
            // Default to "recommend" with configured profile
            cmd_recommend(&config, &ProfileArgs::default(), None, None, false)
        }
    }
}

fn cmd_recommend(
    config: &Config,
    args: &ProfileArgs,
    menu_text: Option<&Path>,
    menu_image: Option<&Path>,
    json: bool,
) -> Result<()> {
    let profile = args.resolve(config)?;
    let catalog = Catalog::load_validated(config)?;
    let menu_items = load_menu_items(config, menu_text, menu_image)?;
    tracing::debug!(
        "Recommending from {} foods with {} menu items",
        catalog.foods.len(),
        menu_items.len()
    );

    let engine = RecommendationEngine::new(&catalog);
    let result = engine.recommend(&profile, &menu_items);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if menu_text.is_some() || menu_image.is_some() {
        display_menu_summary(&menu_items);
    }
    display_result(&profile, &result);
    Ok(())
}

fn cmd_menu(config: &Config, text: Option<&Path>, image: Option<&Path>) -> Result<()> {
    let items = load_menu_items(config, text, image)?;
    if items.is_empty() {
        println!("No valid food items detected.");
    }
    for item in &items {
        println!("{}", item);
    }
    Ok(())
}

fn cmd_catalog(config: &Config, json: bool) -> Result<()> {
    let catalog = match Catalog::load_validated(config) {
        Ok(catalog) => catalog,
        Err(Error::CatalogValidation(problems)) => {
            eprintln!("Catalog validation errors:");
            for problem in &problems {
                eprintln!("  - {}", problem);
            }
            return Err(Error::CatalogValidation(problems));
        }
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.foods)?);
        return Ok(());
    }

    for food in &catalog.foods {
        println!("{}  [{}]", describe_food(food), food.tags.join(", "));
    }
    Ok(())
}

fn cmd_classify(config: &Config, text: &str, labels: &[String]) -> Result<()> {
    let argv = config
        .classifier
        .command
        .clone()
        .ok_or_else(|| Error::Config("no classifier.command configured".into()))?;
    let classifier = CommandClassifier::new(argv)?;

    let label = classify_text(&classifier, text, labels, config.classifier.threshold)?;
    println!("{}", label);
    Ok(())
}

fn load_menu_items(
    config: &Config,
    text: Option<&Path>,
    image: Option<&Path>,
) -> Result<MenuItemSet> {
    if let Some(path) = text {
        let contents = std::fs::read_to_string(path)?;
        return Ok(extract_menu_items(&contents));
    }

    if let Some(path) = image {
        let bytes = std::fs::read(path)?;
        tracing::debug!("Recognizing menu image {:?} ({} bytes)", path, bytes.len());
        let recognizer = CommandRecognizer::new(config.recognizer.command.clone())?;
        return Ok(menu_items_from_image(&recognizer, &bytes));
    }

    Ok(MenuItemSet::new())
}

fn display_menu_summary(items: &MenuItemSet) {
    if items.is_empty() {
        println!("⚠ No valid food items detected.");
        return;
    }

    let preview: Vec<&str> = items.iter().take(5).map(String::as_str).collect();
    let more = if items.len() > preview.len() { " ..." } else { "" };
    println!("Extracted items: {}{}", preview.join(", "), more);
}

fn display_result(profile: &Profile, result: &NutritionResult) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  DAILY NUTRITION: {}", profile.goal.label().to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Calories: {} kcal", result.calories);

    let total = f64::from(result.protein + result.fat + result.carbs);
    for (label, grams) in [
        ("Protein", result.protein),
        ("Fat", result.fat),
        ("Carbs", result.carbs),
    ] {
        let share = if total > 0.0 {
            f64::from(grams) / total * 100.0
        } else {
            0.0
        };
        println!("  {:<8}  {:>4} g  ({:.1}%)", format!("{}:", label), grams, share);
    }

    println!();
    println!("  Recommended foods:");
    for food in &result.foods {
        println!("  ✓ {}", describe_food(food));
    }
    println!();
}

fn describe_food(food: &FoodEntry) -> String {
    format!("{} ({} | {} | {})", food.name, food.region, food.meal, food.diet)
}
