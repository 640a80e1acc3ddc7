use recipe_tags::{
    CategoryNormalizer, CompoundPolicy, NormalizeError, NormalizerConfig, Pluralizer,
};

/// Deterministic stand-in for the English engine: only knows "Taco"/"Tacos"
struct TacoPluralizer;

impl Pluralizer for TacoPluralizer {
    fn plural(&self, word: &str) -> String {
        match word {
            "Taco" => "Tacos".to_string(),
            other => other.to_string(),
        }
    }

    fn singular(&self, word: &str) -> String {
        match word {
            "Tacos" => "Taco".to_string(),
            other => other.to_string(),
        }
    }
}

#[test]
fn test_builder_with_defaults() {
    let normalizer = CategoryNormalizer::builder().build().unwrap();
    let record = normalizer.process(
        "Dinner Recipes, Vegan, Vegetarian Recipes, Breakfast",
        Some("2 hrs 15 mins"),
    );

    assert_eq!(
        record.categories.to_string(),
        "Dinner, Vegan, Vegetarian, Breakfast"
    );
    assert_eq!(record.meal.as_str(), "Dinner");
    assert_eq!(record.course.as_str(), "None");
    assert_eq!(record.diet.as_str(), "Vegan");
    assert_eq!(record.total_minutes, 135);
}

#[test]
fn test_builder_with_injected_pluralizer() {
    let normalizer = CategoryNormalizer::builder()
        .pluralizer(TacoPluralizer)
        .build()
        .unwrap();

    // the fake knows nothing about pies, so both forms survive
    assert_eq!(
        normalizer.normalize("Tacos, Taco, Pies, Pie").to_string(),
        "Taco, Pies, Pie"
    );
}

#[test]
fn test_builder_with_toml_config() {
    let config = NormalizerConfig::from_toml_str(
        r#"
        [cleaning]
        noise_words = ["Ideas", "Recipes"]
        conjunctions = ["and", "&"]

        [vocabulary]
        meal = ["Supper", "Brunch"]
        "#,
    )
    .unwrap();

    let normalizer = CategoryNormalizer::builder().config(config).build().unwrap();
    let record = normalizer.process("Supper Ideas, Brunch & Lunch Recipes", None);

    assert_eq!(record.categories.to_string(), "Supper, Brunch, Lunch");
    assert_eq!(record.meal.as_str(), "Supper");
    assert_eq!(record.total_minutes, 0);
}

#[test]
fn test_builder_prefer_compound() {
    let normalizer = CategoryNormalizer::builder()
        .compound_policy(CompoundPolicy::PreferCompound)
        .build()
        .unwrap();

    assert_eq!(
        normalizer
            .normalize("Apple Pie, Apple, Pie, Dessert")
            .to_string(),
        "Apple Pie, Dessert"
    );
}

#[test]
fn test_builder_rejects_invalid_config() {
    let config = NormalizerConfig::from_toml_str(
        r#"
        [cleaning]
        noise_words = [""]
        "#,
    )
    .unwrap();

    let result = CategoryNormalizer::builder().config(config).build();
    match result {
        Err(NormalizeError::InvalidConfig(message)) => {
            assert!(message.contains("cleaning.noise_words"))
        }
        other => panic!("Expected invalid config error, got {:?}", other),
    }
}

#[test]
fn test_stages_compose_like_normalize() {
    let normalizer = CategoryNormalizer::builder().build().unwrap();
    let raw = "Cookie Recipes, Cookies, Dessert, Dessert";

    let cleaned = normalizer.clean(raw);
    assert_eq!(cleaned, vec!["Cookie", "Cookies", "Dessert", "Dessert"]);

    let deduplicated = normalizer.deduplicate(cleaned);
    assert_eq!(deduplicated, vec!["Cookie", "Dessert"]);

    let collapsed = normalizer.collapse(deduplicated);
    assert_eq!(collapsed, vec!["Cookie", "Dessert"]);

    assert_eq!(normalizer.normalize(raw).as_slice(), collapsed.as_slice());
}
