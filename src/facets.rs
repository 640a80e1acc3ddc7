use crate::model::{Facet, FacetValue, Facets, TokenSet};

/// Fixed set of canonical values for one facet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    facet: Facet,
    values: Vec<String>,
}

impl Vocabulary {
    pub fn new(facet: Facet, values: impl IntoIterator<Item = String>) -> Self {
        Self {
            facet,
            values: values.into_iter().collect(),
        }
    }

    pub fn facet(&self) -> Facet {
        self.facet
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, token: &str) -> bool {
        self.values.iter().any(|value| value == token)
    }

    /// First token, in set order, that is an exact member of this vocabulary.
    ///
    /// Well-formed data carries at most one member per vocabulary. When
    /// several are present the earliest label wins; no priority between
    /// vocabulary members is implied.
    pub fn extract(&self, tokens: &TokenSet) -> FacetValue {
        tokens
            .iter()
            .find(|token| self.contains(token))
            .map(|token| FacetValue::Matched(token.to_string()))
            .unwrap_or(FacetValue::Absent)
    }
}

/// The three facet vocabularies, each extracted independently
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetVocabularies {
    pub meal: Vocabulary,
    pub course: Vocabulary,
    pub diet: Vocabulary,
}

impl FacetVocabularies {
    pub fn get(&self, facet: Facet) -> &Vocabulary {
        match facet {
            Facet::Meal => &self.meal,
            Facet::Course => &self.course,
            Facet::Diet => &self.diet,
        }
    }

    pub fn extract(&self, tokens: &TokenSet) -> Facets {
        Facets {
            meal: self.meal.extract(tokens),
            course: self.course.extract(tokens),
            diet: self.diet.extract(tokens),
        }
    }
}
