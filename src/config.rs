use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::combinations::CompoundPolicy;

/// Main normalizer configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct NormalizerConfig {
    /// Tokenizer/cleaner settings
    #[serde(default)]
    pub cleaning: CleaningConfig,
    /// Plural/singular deduplication settings
    #[serde(default)]
    pub dedup: DedupConfig,
    /// Compound/atom collapse settings
    #[serde(default)]
    pub combinations: CombinationsConfig,
    /// Controlled vocabularies used for facet extraction
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

/// Configuration for splitting and cleaning raw label strings
#[derive(Debug, Deserialize, Clone)]
pub struct CleaningConfig {
    /// Words stripped from the end of every token (e.g. "Dinner Recipes" -> "Dinner")
    #[serde(default = "default_noise_words")]
    pub noise_words: Vec<String>,
    /// Words that join two labels inside one segment ("Breakfast and Lunch")
    #[serde(default = "default_conjunctions")]
    pub conjunctions: Vec<String>,
    /// Whether HTML entities in scraped labels are decoded before splitting words
    #[serde(default = "default_decode_html")]
    pub decode_html: bool,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            noise_words: default_noise_words(),
            conjunctions: default_conjunctions(),
            decode_html: default_decode_html(),
        }
    }
}

/// Configuration for the plural/singular deduplication pass
#[derive(Debug, Deserialize, Clone)]
pub struct DedupConfig {
    /// Singular words whose canonical form is the plural ("Recipe" -> "Recipes")
    #[serde(default = "default_plural_canonical")]
    pub plural_canonical: Vec<String>,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            plural_canonical: default_plural_canonical(),
        }
    }
}

/// Configuration for the combination matcher
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CombinationsConfig {
    /// Which representation survives when a compound and its atoms are both present
    #[serde(default)]
    pub policy: CompoundPolicy,
}

/// Controlled vocabularies, one per facet
#[derive(Debug, Deserialize, Clone)]
pub struct VocabularyConfig {
    #[serde(default = "default_meal_types")]
    pub meal: Vec<String>,
    #[serde(default = "default_course_types")]
    pub course: Vec<String>,
    #[serde(default = "default_diet_tags")]
    pub diet: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            meal: default_meal_types(),
            course: default_course_types(),
            diet: default_diet_tags(),
        }
    }
}

// Default value functions
fn default_noise_words() -> Vec<String> {
    vec!["Recipes".to_string(), "Recipe".to_string()]
}

fn default_conjunctions() -> Vec<String> {
    vec!["and".to_string()]
}

fn default_decode_html() -> bool {
    true
}

fn default_plural_canonical() -> Vec<String> {
    vec!["Recipe".to_string()]
}

fn default_meal_types() -> Vec<String> {
    ["Breakfast", "Brunch", "Lunch", "Dinner", "Snack"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_course_types() -> Vec<String> {
    [
        "Appetizer",
        "Main Dish",
        "Side Dish",
        "Dessert",
        "Salad",
        "Bread",
        "Drink",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_diet_tags() -> Vec<String> {
    [
        "Vegan",
        "Vegetarian",
        "Gluten Free",
        "Dairy Free",
        "Keto",
        "Paleo",
        "Low Carb",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl NormalizerConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the lookup order.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Build a configuration from an in-memory TOML document.
    ///
    /// Sections and keys that are missing fall back to their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_TAGS__ prefix
/// 2. recipe_tags.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_TAGS__COMBINATIONS__POLICY=prefer_compound
pub fn load_config() -> Result<NormalizerConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe_tags").required(false))
        // Use double underscore for nested: RECIPE_TAGS__CLEANING__DECODE_HTML
        .add_source(
            Environment::with_prefix("RECIPE_TAGS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
