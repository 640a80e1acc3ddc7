pub mod builder;
pub mod combinations;
pub mod config;
pub mod dedup;
pub mod duration;
pub mod error;
pub mod facets;
pub mod ingredients;
pub mod model;
pub mod pluralizer;
pub mod tokenizer;
pub mod uniffi_bindings;

pub use builder::{CategoryNormalizer, CategoryNormalizerBuilder};
pub use combinations::{generate_combinations, CompoundPolicy};
pub use config::{load_config, NormalizerConfig};
pub use duration::parse_duration_minutes;
pub use error::NormalizeError;
pub use ingredients::ingredient_flags;
pub use model::{Facet, FacetValue, Facets, NormalizedRecord, TokenSet, NONE_SENTINEL};
pub use pluralizer::{EnglishPluralizer, Pluralizer};

/// Build a normalizer from `recipe_tags.toml` and `RECIPE_TAGS__*` variables
pub fn normalizer_from_env() -> Result<CategoryNormalizer, NormalizeError> {
    let config = load_config()?;
    CategoryNormalizer::builder().config(config).build()
}

/// Normalize one raw category string with the environment's configuration
///
/// Builds a fresh normalizer on every call; keep a [`CategoryNormalizer`]
/// around when processing many records.
pub fn normalize_categories(raw: &str) -> Result<TokenSet, NormalizeError> {
    Ok(normalizer_from_env()?.normalize(raw))
}

/// Normalize one record with the environment's configuration
pub fn normalize_record(
    raw_categories: &str,
    raw_duration: Option<&str>,
) -> Result<NormalizedRecord, NormalizeError> {
    Ok(normalizer_from_env()?.process(raw_categories, raw_duration))
}
