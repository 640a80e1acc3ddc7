use log::debug;

use crate::combinations::{collapse_combinations, CompoundPolicy};
use crate::config::NormalizerConfig;
use crate::dedup::deduplicate;
use crate::duration::parse_duration_minutes;
use crate::facets::{FacetVocabularies, Vocabulary};
use crate::model::{Facet, FacetValue, Facets, NormalizedRecord, TokenSet};
use crate::pluralizer::{EnglishPluralizer, Pluralizer};
use crate::tokenizer::Tokenizer;
use crate::NormalizeError;

/// Builder for configuring a [`CategoryNormalizer`]
#[derive(Default)]
pub struct CategoryNormalizerBuilder {
    config: Option<NormalizerConfig>,
    pluralizer: Option<Box<dyn Pluralizer>>,
    policy: Option<CompoundPolicy>,
}

impl CategoryNormalizerBuilder {
    /// Use the given configuration instead of the built-in defaults
    ///
    /// # Example
    /// ```
    /// use recipe_tags::{CategoryNormalizer, NormalizerConfig};
    ///
    /// let config = NormalizerConfig::from_toml_str("[vocabulary]\nmeal = [\"Supper\"]").unwrap();
    /// let normalizer = CategoryNormalizer::builder().config(config).build().unwrap();
    /// ```
    pub fn config(mut self, config: NormalizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the default English pluralizer
    pub fn pluralizer(mut self, pluralizer: impl Pluralizer + 'static) -> Self {
        self.pluralizer = Some(Box::new(pluralizer));
        self
    }

    /// Override the compound policy from the configuration
    ///
    /// # Example
    /// ```
    /// use recipe_tags::{CategoryNormalizer, CompoundPolicy};
    ///
    /// let normalizer = CategoryNormalizer::builder()
    ///     .compound_policy(CompoundPolicy::PreferCompound)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(normalizer.normalize("Apple Pie, Apple, Pie").to_string(), "Apple Pie");
    /// ```
    pub fn compound_policy(mut self, policy: CompoundPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Validate the configuration and build the normalizer
    ///
    /// # Errors
    /// Returns `NormalizeError::InvalidConfig` if:
    /// - a noise word or conjunction is empty or spans several words
    /// - a plural-canonical word is empty or spans several words
    /// - a vocabulary value is empty or contains a comma
    pub fn build(self) -> Result<CategoryNormalizer, NormalizeError> {
        let config = self.config.unwrap_or_default();

        validate_words("cleaning.noise_words", &config.cleaning.noise_words)?;
        validate_words("cleaning.conjunctions", &config.cleaning.conjunctions)?;
        validate_words("dedup.plural_canonical", &config.dedup.plural_canonical)?;
        validate_vocabulary("vocabulary.meal", &config.vocabulary.meal)?;
        validate_vocabulary("vocabulary.course", &config.vocabulary.course)?;
        validate_vocabulary("vocabulary.diet", &config.vocabulary.diet)?;

        let policy = self.policy.unwrap_or(config.combinations.policy);
        debug!("Building category normalizer with {:?}", policy);

        Ok(CategoryNormalizer {
            tokenizer: Tokenizer::new(&config.cleaning),
            plural_canonical: config.dedup.plural_canonical,
            policy,
            vocabularies: FacetVocabularies {
                meal: Vocabulary::new(Facet::Meal, config.vocabulary.meal),
                course: Vocabulary::new(Facet::Course, config.vocabulary.course),
                diet: Vocabulary::new(Facet::Diet, config.vocabulary.diet),
            },
            pluralizer: self
                .pluralizer
                .unwrap_or_else(|| Box::new(EnglishPluralizer)),
        })
    }
}

fn validate_words(key: &str, words: &[String]) -> Result<(), NormalizeError> {
    for word in words {
        if word.trim().is_empty() || word.split_whitespace().count() != 1 || word.contains(',') {
            return Err(NormalizeError::InvalidConfig(format!(
                "{key} must hold single words, got {word:?}"
            )));
        }
    }
    Ok(())
}

fn validate_vocabulary(key: &str, values: &[String]) -> Result<(), NormalizeError> {
    for value in values {
        if value.trim().is_empty() || value.contains(',') || value.trim() != value {
            return Err(NormalizeError::InvalidConfig(format!(
                "{key} values must be non-empty, trimmed and comma-free, got {value:?}"
            )));
        }
    }
    Ok(())
}

/// Turns raw category strings into canonical tag sets and facet values.
///
/// Holds only read-only configuration, so one instance can serve any number
/// of threads at once.
pub struct CategoryNormalizer {
    tokenizer: Tokenizer,
    plural_canonical: Vec<String>,
    policy: CompoundPolicy,
    vocabularies: FacetVocabularies,
    pluralizer: Box<dyn Pluralizer>,
}

impl CategoryNormalizer {
    /// Creates a new builder for configuring a normalizer
    ///
    /// # Example
    /// ```
    /// use recipe_tags::CategoryNormalizer;
    ///
    /// let normalizer = CategoryNormalizer::builder().build().unwrap();
    /// let tags = normalizer.normalize("Dinner Recipes, Vegan, Vegetarian Recipes, Breakfast");
    /// assert_eq!(tags.to_string(), "Dinner, Vegan, Vegetarian, Breakfast");
    /// ```
    pub fn builder() -> CategoryNormalizerBuilder {
        CategoryNormalizerBuilder::default()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn vocabularies(&self) -> &FacetVocabularies {
        &self.vocabularies
    }

    pub fn compound_policy(&self) -> CompoundPolicy {
        self.policy
    }

    /// Split a raw label string into cleaned tokens
    pub fn clean(&self, raw: &str) -> Vec<String> {
        self.tokenizer.clean(raw)
    }

    /// Remove exact duplicates and plural variants
    pub fn deduplicate(&self, tokens: Vec<String>) -> Vec<String> {
        deduplicate(tokens, &self.plural_canonical, self.pluralizer.as_ref())
    }

    /// Collapse compounds restated by their single-word atoms
    pub fn collapse(&self, tokens: Vec<String>) -> Vec<String> {
        collapse_combinations(tokens, self.policy, self.pluralizer.as_ref())
    }

    /// Run the full label pipeline: clean, deduplicate, collapse
    pub fn normalize(&self, raw: &str) -> TokenSet {
        let tokens = self.collapse(self.deduplicate(self.clean(raw)));
        TokenSet::new(tokens)
    }

    pub fn extract(&self, facet: Facet, tokens: &TokenSet) -> FacetValue {
        self.vocabularies.get(facet).extract(tokens)
    }

    pub fn extract_facets(&self, tokens: &TokenSet) -> Facets {
        self.vocabularies.extract(tokens)
    }

    pub fn parse_duration(&self, raw: &str) -> u32 {
        parse_duration_minutes(raw)
    }

    /// Normalize one record: its category labels and, when present, its
    /// duration string
    pub fn process(&self, raw_categories: &str, raw_duration: Option<&str>) -> NormalizedRecord {
        let categories = self.normalize(raw_categories);
        let Facets { meal, course, diet } = self.extract_facets(&categories);
        let total_minutes = raw_duration.map(parse_duration_minutes).unwrap_or(0);

        NormalizedRecord {
            categories,
            meal,
            course,
            diet,
            total_minutes,
        }
    }
}

impl std::fmt::Debug for CategoryNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryNormalizer")
            .field("tokenizer", &self.tokenizer)
            .field("plural_canonical", &self.plural_canonical)
            .field("policy", &self.policy)
            .field("vocabularies", &self.vocabularies)
            .finish_non_exhaustive()
    }
}
