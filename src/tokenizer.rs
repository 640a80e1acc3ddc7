use html_escape::decode_html_entities;
use log::trace;

use crate::config::CleaningConfig;

/// Splits raw comma-delimited label strings into cleaned tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    noise_words: Vec<String>,
    conjunctions: Vec<String>,
    decode_html: bool,
}

impl Tokenizer {
    pub fn new(config: &CleaningConfig) -> Self {
        Self {
            noise_words: config.noise_words.clone(),
            conjunctions: config.conjunctions.clone(),
            decode_html: config.decode_html,
        }
    }

    /// Split a raw label string into trimmed, non-empty labels.
    ///
    /// Segments are separated by commas, and a segment joined by one of the
    /// conjunction words ("Breakfast and Lunch") yields one label per side.
    /// Internal whitespace is collapsed to single spaces. Noise words are
    /// kept; see [`Tokenizer::clean`].
    pub fn split_labels(&self, raw: &str) -> Vec<String> {
        self.split_words(raw)
            .into_iter()
            .map(|words| words.join(" "))
            .collect()
    }

    /// Split a raw label string and strip trailing noise words from every
    /// label. Labels made only of noise words are dropped.
    pub fn clean(&self, raw: &str) -> Vec<String> {
        self.split_words(raw)
            .into_iter()
            .filter_map(|mut words| {
                while words
                    .last()
                    .is_some_and(|word| is_one_of(word, &self.noise_words))
                {
                    words.pop();
                }
                if words.is_empty() {
                    trace!("Dropping label made only of noise words");
                    None
                } else {
                    Some(words.join(" "))
                }
            })
            .collect()
    }

    fn split_words(&self, raw: &str) -> Vec<Vec<String>> {
        let mut labels = Vec::new();

        // decode first: a decoded entity may itself be a comma or whitespace
        let decoded;
        let raw = if self.decode_html {
            decoded = decode_html_symbols(raw);
            decoded.as_str()
        } else {
            raw
        };

        for segment in raw.split(',') {
            let mut current: Vec<String> = Vec::new();
            for word in segment.split_whitespace() {
                if is_one_of(word, &self.conjunctions) {
                    if !current.is_empty() {
                        labels.push(std::mem::take(&mut current));
                    }
                } else {
                    current.push(word.to_string());
                }
            }
            if !current.is_empty() {
                labels.push(current);
            }
        }

        labels
    }
}

fn is_one_of(word: &str, candidates: &[String]) -> bool {
    candidates
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}

/// Decode until nothing changes; scraped labels are often escaped twice ("&amp;amp;")
fn decode_html_symbols(text: &str) -> String {
    let mut decoded = text.to_string();
    loop {
        let next = decode_html_entities(&decoded);
        if next == decoded {
            return decoded;
        }
        decoded = next.into_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(&CleaningConfig::default())
    }

    #[test]
    fn test_clean_strips_noise_suffix() {
        assert_eq!(
            tokenizer().clean("Dinner Recipes, Vegan, Vegetarian Recipes, Breakfast"),
            vec!["Dinner", "Vegan", "Vegetarian", "Breakfast"]
        );
    }

    #[test]
    fn test_clean_drops_noise_only_labels() {
        assert_eq!(
            tokenizer().clean("Recipes, Soup Recipes, Vegan"),
            vec!["Soup", "Vegan"]
        );
        assert_eq!(tokenizer().clean("Recipe Recipes"), Vec::<String>::new());
    }

    #[test]
    fn test_clean_skips_empty_segments() {
        assert_eq!(
            tokenizer().clean("Lunch Recipes, Dinner Recipes, , Dessert"),
            vec!["Lunch", "Dinner", "Dessert"]
        );
        assert_eq!(
            tokenizer().clean(",, Lunch,,,Dinner ,"),
            vec!["Lunch", "Dinner"]
        );
        assert!(tokenizer().clean("").is_empty());
        assert!(tokenizer().clean("  ,  , ").is_empty());
    }

    #[test]
    fn test_clean_only_strips_whole_trailing_words() {
        assert_eq!(
            tokenizer().clean("Recipes For Kids, MyRecipes, Soup recipes"),
            vec!["Recipes For Kids", "MyRecipes", "Soup"]
        );
    }

    #[test]
    fn test_clean_single_word() {
        assert_eq!(tokenizer().clean("Breakfast"), vec!["Breakfast"]);
    }

    #[test]
    fn test_conjunctions_split_labels() {
        assert_eq!(
            tokenizer().split_labels("Dinner, Breakfast and Lunch"),
            vec!["Dinner", "Breakfast", "Lunch"]
        );
        assert_eq!(
            tokenizer().clean("Breakfast AND Brunch Recipes, and"),
            vec!["Breakfast", "Brunch"]
        );
    }

    #[test]
    fn test_split_labels_keeps_noise_words() {
        assert_eq!(
            tokenizer().split_labels("Soup Recipe,   Vegan  "),
            vec!["Soup Recipe", "Vegan"]
        );
    }

    #[test]
    fn test_internal_whitespace_is_collapsed() {
        assert_eq!(
            tokenizer().clean("Apple \t  Pie ,\nMain   Dish"),
            vec!["Apple Pie", "Main Dish"]
        );
    }

    #[test]
    fn test_html_entities_are_decoded() {
        assert_eq!(
            tokenizer().clean("Mac &amp;amp; Cheese, Cr&#232;me Br&#251;l&#233;e"),
            vec!["Mac & Cheese", "Crème Brûlée"]
        );

        assert_eq!(
            tokenizer().clean("Lunch&#44; Dinner&nbsp;Recipes"),
            vec!["Lunch", "Dinner"]
        );

        let raw = Tokenizer::new(&CleaningConfig {
            decode_html: false,
            ..CleaningConfig::default()
        });
        assert_eq!(raw.clean("Mac &amp; Cheese"), vec!["Mac &amp; Cheese"]);
    }
}
