use std::fmt;

use serde::{Serialize, Serializer};

/// Rendering of a facet that matched nothing
pub const NONE_SENTINEL: &str = "None";

/// Ordered set of unique, cleaned category labels.
///
/// Order is first-seen order in the raw label string. The display form joins
/// the labels with `", "`, which is what downstream consumers split on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    /// Build a set from already-cleaned tokens, dropping later duplicates
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        let mut set = Self::default();
        for token in tokens {
            if !set.contains(&token) {
                set.tokens.push(token);
            }
        }
        set
    }

    /// Split a displayed token set back into its labels
    pub fn parse(joined: &str) -> Self {
        Self::new(
            joined
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(", "))
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The controlled-vocabulary classifications derived from a token set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Meal,
    Course,
    Diet,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Meal => "meal",
            Facet::Course => "course",
            Facet::Diet => "diet",
        }
    }
}

/// Outcome of matching a token set against one vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetValue {
    /// The vocabulary member found in the token set
    Matched(String),
    /// No vocabulary member present, rendered as `"None"`
    #[default]
    Absent,
}

impl FacetValue {
    pub fn as_str(&self) -> &str {
        match self {
            FacetValue::Matched(value) => value,
            FacetValue::Absent => NONE_SENTINEL,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FacetValue::Absent)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FacetValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Facet values of one record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Facets {
    pub meal: FacetValue,
    pub course: FacetValue,
    pub diet: FacetValue,
}

impl Facets {
    pub fn get(&self, facet: Facet) -> &FacetValue {
        match facet {
            Facet::Meal => &self.meal,
            Facet::Course => &self.course,
            Facet::Diet => &self.diet,
        }
    }
}

/// Normalized output for one recipe record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NormalizedRecord {
    /// Cleaned, deduplicated labels, serialized as `"A, B, C"`
    pub categories: TokenSet,
    pub meal: FacetValue,
    pub course: FacetValue,
    pub diet: FacetValue,
    /// Total time in minutes, 0 when no duration was given
    pub total_minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_set_keeps_first_seen_order() {
        let set = TokenSet::new(
            ["Dinner", "Vegan", "Dinner", "Breakfast"]
                .iter()
                .map(|s| s.to_string()),
        );
        assert_eq!(set.as_slice(), ["Dinner", "Vegan", "Breakfast"]);
        assert_eq!(set.to_string(), "Dinner, Vegan, Breakfast");
    }

    #[test]
    fn test_token_set_parse_round_trips_display() {
        let set = TokenSet::parse("Dinner, Main Dish, Vegan");
        assert_eq!(set.len(), 3);
        assert_eq!(TokenSet::parse(&set.to_string()), set);
        assert!(TokenSet::parse("").is_empty());
        assert!(TokenSet::parse(" , ,").is_empty());
    }

    #[test]
    fn test_facet_value_sentinel() {
        assert_eq!(FacetValue::Absent.as_str(), "None");
        assert_eq!(FacetValue::Matched("Lunch".to_string()).to_string(), "Lunch");
        assert!(FacetValue::default().is_absent());
    }

    #[test]
    fn test_record_serializes_flat_strings() {
        let record = NormalizedRecord {
            categories: TokenSet::parse("Dinner, Vegan"),
            meal: FacetValue::Matched("Dinner".to_string()),
            course: FacetValue::Absent,
            diet: FacetValue::Matched("Vegan".to_string()),
            total_minutes: 90,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["categories"], "Dinner, Vegan");
        assert_eq!(json["meal"], "Dinner");
        assert_eq!(json["course"], "None");
        assert_eq!(json["diet"], "Vegan");
        assert_eq!(json["total_minutes"], 90);
    }
}
