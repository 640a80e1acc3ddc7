use std::collections::HashSet;

use log::debug;
use serde::Deserialize;

use crate::pluralizer::Pluralizer;

/// Which side survives when a two-word label and both of its words are
/// present as separate labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundPolicy {
    /// Drop the compound ("Apple Pie") and keep the atoms ("Apple", "Pie")
    #[default]
    PreferAtoms,
    /// Drop the atoms and keep the compound
    PreferCompound,
}

/// All surface forms of the concept made of `first` and `second`.
///
/// The four singular/plural combinations in the given word order come first,
/// followed by the same four in reversed order. Duplicates (words the
/// pluralizer leaves unchanged) are removed.
pub fn generate_combinations(
    first: &str,
    second: &str,
    pluralizer: &dyn Pluralizer,
) -> Vec<String> {
    let first_plural = pluralizer.plural(first);
    let second_plural = pluralizer.plural(second);

    let candidates = [
        format!("{first} {second}"),
        format!("{first_plural} {second}"),
        format!("{first} {second_plural}"),
        format!("{first_plural} {second_plural}"),
        format!("{second} {first}"),
        format!("{second_plural} {first}"),
        format!("{second} {first_plural}"),
        format!("{second_plural} {first_plural}"),
    ];

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.clone()))
        .collect()
}

fn word_count(token: &str) -> usize {
    token.split_whitespace().count()
}

/// Collapse two-word labels that restate two single-word labels of the same
/// set ("Apple Pie" next to "Apple" and "Pie").
///
/// A compound matches a pair of atoms when it equals one of the pair's
/// [`generate_combinations`], computed from the atoms as given and from their
/// singular forms. Labels with any other word count are left alone.
pub fn collapse_combinations(
    tokens: Vec<String>,
    policy: CompoundPolicy,
    pluralizer: &dyn Pluralizer,
) -> Vec<String> {
    let atoms: Vec<usize> = (0..tokens.len())
        .filter(|&i| word_count(&tokens[i]) == 1)
        .collect();
    let compounds: Vec<usize> = (0..tokens.len())
        .filter(|&i| word_count(&tokens[i]) == 2)
        .collect();

    if atoms.len() < 2 || compounds.is_empty() {
        return tokens;
    }

    let mut redundant: HashSet<usize> = HashSet::new();

    for (n, &a) in atoms.iter().enumerate() {
        for &b in &atoms[n + 1..] {
            let mut forms: HashSet<String> =
                generate_combinations(&tokens[a], &tokens[b], pluralizer)
                    .into_iter()
                    .collect();
            forms.extend(generate_combinations(
                &pluralizer.singular(&tokens[a]),
                &pluralizer.singular(&tokens[b]),
                pluralizer,
            ));

            for &c in &compounds {
                if !forms.contains(&tokens[c]) {
                    continue;
                }
                match policy {
                    CompoundPolicy::PreferAtoms => {
                        debug!(
                            "Dropping {:?}, already covered by {:?} and {:?}",
                            tokens[c], tokens[a], tokens[b]
                        );
                        redundant.insert(c);
                    }
                    CompoundPolicy::PreferCompound => {
                        debug!(
                            "Dropping {:?} and {:?}, already covered by {:?}",
                            tokens[a], tokens[b], tokens[c]
                        );
                        redundant.insert(a);
                        redundant.insert(b);
                    }
                }
            }
        }
    }

    tokens
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !redundant.contains(i))
        .map(|(_, token)| token)
        .collect()
}
