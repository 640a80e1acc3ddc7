//! Property-based tests for the label pipeline
//!
//! Raw label strings are generated from a small recipe vocabulary that mixes
//! singular and plural forms, noise words, conjunctions and sloppy comma
//! separators, then checked against the pipeline's invariants:
//! - normalizing the displayed output again changes nothing
//! - no label ends with a noise word
//! - no two labels are singular/plural variants of each other
//! - a compound never survives next to both of its atoms
//! - facets are vocabulary members or "None"

use proptest::prelude::*;
use recipe_tags::{
    generate_combinations, CategoryNormalizer, EnglishPluralizer, Facet, Pluralizer, TokenSet,
};

const WORDS: &[&str] = &[
    "Apple",
    "Apples",
    "Pie",
    "Pies",
    "Dinner",
    "Dinners",
    "Vegan",
    "Vegetarian",
    "Breakfast",
    "Lunch",
    "Main",
    "Dish",
    "Dishes",
    "Cookie",
    "Cookies",
    "Soup",
    "Quick",
    "Bread",
    "Breads",
    "Berry",
    "Berries",
    "Recipe",
    "Recipes",
    "recipes",
];

const SEPARATORS: &[&str] = &[",", ", ", " , ", ",,", ", ,", " and "];

/// Generate one label of one to three words
fn label_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..=3).prop_map(|words| words.join(" "))
}

/// Generate a raw, comma-separated label string
fn raw_labels_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((label_strategy(), prop::sample::select(SEPARATORS)), 0..8).prop_map(
        |parts| {
            parts
                .into_iter()
                .map(|(label, separator)| format!("{label}{separator}"))
                .collect::<String>()
        },
    )
}

fn normalizer() -> CategoryNormalizer {
    CategoryNormalizer::builder().build().unwrap()
}

fn split_last(token: &str) -> (&str, &str) {
    token.rsplit_once(' ').unwrap_or(("", token))
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_normalize_is_idempotent(raw in raw_labels_strategy()) {
            let normalizer = normalizer();
            let once = normalizer.normalize(&raw);
            let twice = normalizer.normalize(&once.to_string());
            prop_assert_eq!(&twice, &once, "raw input: {:?}", raw);
        }

        #[test]
        fn test_displayed_output_reparses(raw in raw_labels_strategy()) {
            let tags = normalizer().normalize(&raw);
            prop_assert_eq!(TokenSet::parse(&tags.to_string()), tags);
        }

        #[test]
        fn test_no_label_ends_with_noise_word(raw in raw_labels_strategy()) {
            for token in normalizer().normalize(&raw).iter() {
                let (_, last) = split_last(token);
                prop_assert!(!last.eq_ignore_ascii_case("recipe"), "{:?}", token);
                prop_assert!(!last.eq_ignore_ascii_case("recipes"), "{:?}", token);
            }
        }

        #[test]
        fn test_no_plural_variants_survive(raw in raw_labels_strategy()) {
            let pluralizer = EnglishPluralizer;
            let tags = normalizer().normalize(&raw);
            for first in tags.iter() {
                for second in tags.iter().filter(|t| *t != first) {
                    let (head_1, last_1) = split_last(first);
                    let (head_2, last_2) = split_last(second);
                    prop_assert!(
                        !(head_1 == head_2 && pluralizer.singular(last_2) == last_1),
                        "{:?} is a plural variant of {:?}", second, first
                    );
                }
            }
        }

        #[test]
        fn test_compound_never_survives_with_its_atoms(raw in raw_labels_strategy()) {
            let pluralizer = EnglishPluralizer;
            let tags = normalizer().normalize(&raw);
            let atoms: Vec<&str> = tags.iter().filter(|t| !t.contains(' ')).collect();
            let compounds: Vec<&str> = tags
                .iter()
                .filter(|t| t.split(' ').count() == 2)
                .collect();

            for (n, a) in atoms.iter().enumerate() {
                for b in &atoms[n + 1..] {
                    let mut forms = generate_combinations(a, b, &pluralizer);
                    forms.extend(generate_combinations(
                        &pluralizer.singular(a),
                        &pluralizer.singular(b),
                        &pluralizer,
                    ));
                    for compound in &compounds {
                        prop_assert!(
                            !forms.iter().any(|form| form == compound),
                            "{:?} survived next to {:?} and {:?}", compound, a, b
                        );
                    }
                }
            }
        }

        #[test]
        fn test_facets_come_from_vocabulary(raw in raw_labels_strategy()) {
            let normalizer = normalizer();
            let tags = normalizer.normalize(&raw);
            for facet in [Facet::Meal, Facet::Course, Facet::Diet] {
                let value = normalizer.extract(facet, &tags);
                let vocabulary = normalizer.vocabularies().get(facet);
                prop_assert!(
                    value.is_absent() || vocabulary.contains(value.as_str()),
                    "{:?} is not a {} value", value, facet.as_str()
                );
                if !value.is_absent() {
                    prop_assert!(tags.contains(value.as_str()));
                }
            }
        }

        #[test]
        fn test_duration_never_panics(raw in ".{0,40}") {
            let _ = recipe_tags::parse_duration_minutes(&raw);
        }

        #[test]
        fn test_duration_components(hours in 0u32..100, minutes in 0u32..60) {
            let raw = format!("{hours} hrs {minutes} mins");
            prop_assert_eq!(recipe_tags::parse_duration_minutes(&raw), hours * 60 + minutes);
        }
    }
}
