//! Singular/plural inflection of single English words.
//!
//! The normalizer only ever needs two operations, `plural` and `singular`,
//! and both must be total: a word the engine cannot inflect comes back
//! unchanged. The [`Pluralizer`] trait is the seam where a different engine
//! (or a deterministic fake in tests) is plugged in.

use log::trace;

/// Inflects single words between their singular and plural forms
pub trait Pluralizer: Send + Sync {
    /// Plural form of `word`, or `word` itself when it cannot be inflected
    fn plural(&self, word: &str) -> String;

    /// Singular form of `word`, or `word` itself when it is already singular
    /// or cannot be inflected
    fn singular(&self, word: &str) -> String;
}

/// Rule-based English pluralizer tuned for recipe vocabulary
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishPluralizer;

const UNCOUNTABLE: &[&str] = &[
    "asparagus",
    "couscous",
    "deer",
    "fish",
    "hummus",
    "molasses",
    "rice",
    "series",
    "sheep",
    "species",
    "swiss",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("calf", "calves"),
    ("child", "children"),
    ("echo", "echoes"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("hero", "heroes"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("loaf", "loaves"),
    ("man", "men"),
    ("mango", "mangoes"),
    ("mouse", "mice"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

// Nouns ending in "ie" whose plural "-ies" must not become "-y"
const IE_NOUNS: &[&str] = &[
    "birdie", "brownie", "calorie", "cookie", "goodie", "hoagie", "lie", "movie", "pie",
    "pierogie", "rookie", "smoothie", "sweetie", "tie", "veggie", "zombie",
];

// Nouns ending in "che" whose plural "-ches" only drops the "s"
const CHE_NOUNS: &[&str] = &[
    "avalanche", "brioche", "cache", "creche", "ganache", "moustache", "niche", "panache",
    "quiche",
];

/// Words made of anything but letters are left alone
fn is_inflectable(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Re-apply the casing of `original` to a lowercase inflection of it.
///
/// All-caps words stay all-caps; otherwise the case of each leading character
/// shared with the original is copied over and the new tail stays lowercase.
fn restore_case(original: &str, lowered: &str) -> String {
    let letters = original.chars().filter(|c| c.is_alphabetic()).count();
    if letters > 1 && original.chars().all(|c| !c.is_lowercase()) {
        return lowered.to_uppercase();
    }

    let mut restored = String::with_capacity(lowered.len());
    let mut original_chars = original.chars();
    let mut shared = true;
    for c in lowered.chars() {
        match original_chars.next() {
            Some(o) if shared && o.to_lowercase().eq(c.to_lowercase()) => restored.push(o),
            _ => {
                shared = false;
                restored.push(c);
            }
        }
    }
    restored
}

fn lookup_plural(lower: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(singular, _)| *singular == lower)
        .map(|(_, plural)| *plural)
}

fn lookup_singular(lower: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(_, plural)| *plural == lower)
        .map(|(singular, _)| *singular)
}

fn pluralize_lower(lower: &str) -> String {
    if let Some(plural) = lookup_plural(lower) {
        return plural.to_string();
    }
    if lookup_singular(lower).is_some() {
        // already an irregular plural
        return lower.to_string();
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{lower}es");
    }

    if let Some(stem) = lower.strip_suffix('y') {
        if stem.chars().last().is_some_and(is_consonant) {
            return format!("{stem}ies");
        }
    }

    format!("{lower}s")
}

fn singularize_lower(lower: &str) -> String {
    if let Some(singular) = lookup_singular(lower) {
        return singular.to_string();
    }
    if lookup_plural(lower).is_some() || lower.chars().count() <= 2 {
        return lower.to_string();
    }
    if ["ss", "us", "is"].iter().any(|suffix| lower.ends_with(suffix)) {
        return lower.to_string();
    }

    if let Some(stem) = lower.strip_suffix("ies") {
        let ie_form = &lower[..lower.len() - 1];
        if IE_NOUNS.contains(&ie_form) || stem.is_empty() {
            return ie_form.to_string();
        }
        return format!("{stem}y");
    }

    if let Some(stem) = lower.strip_suffix("ches") {
        let che_form = &lower[..lower.len() - 1];
        if CHE_NOUNS.contains(&che_form) {
            return che_form.to_string();
        }
        return format!("{stem}ch");
    }

    for suffix in ["shes", "sses", "xes", "zzes"] {
        if lower.ends_with(suffix) {
            return lower[..lower.len() - 2].to_string();
        }
    }

    match lower.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => lower.to_string(),
    }
}

impl Pluralizer for EnglishPluralizer {
    fn plural(&self, word: &str) -> String {
        if !is_inflectable(word) {
            trace!("Cannot pluralize {:?}, keeping it as is", word);
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }

        restore_case(word, &pluralize_lower(&lower))
    }

    fn singular(&self, word: &str) -> String {
        if !is_inflectable(word) {
            trace!("Cannot singularize {:?}, keeping it as is", word);
            return word.to_string();
        }

        let lower = word.to_lowercase();
        if UNCOUNTABLE.contains(&lower.as_str()) {
            return word.to_string();
        }

        restore_case(word, &singularize_lower(&lower))
    }
}
