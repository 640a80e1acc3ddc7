use std::collections::{HashMap, HashSet};

use log::debug;

use crate::pluralizer::Pluralizer;

/// Keep the first occurrence of every token
pub fn dedup_exact(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// A token split into everything before its last word and its last word
fn split_last_word(token: &str) -> (&str, &str) {
    match token.rsplit_once(' ') {
        Some((head, last)) => (head, last),
        None => ("", token),
    }
}

fn join_words(head: &str, last: &str) -> String {
    if head.is_empty() {
        last.to_string()
    } else {
        format!("{head} {last}")
    }
}

/// Tokens that only differ by the number of their last word
struct VariantGroup {
    head: String,
    singular: String,
    /// (position in input, token)
    members: Vec<(usize, String)>,
}

/// Drop tokens that are plural variants of another retained token.
///
/// Tokens are grouped by their leading words plus the singular of their last
/// word. A group whose singular last word is one of `plural_canonical`
/// collapses to the plural form ("Soup Recipe" becomes "Soup Recipes").
/// Any other group keeps its singular member when one is present and drops
/// the plural variants; a group without a singular member is left untouched.
/// Survivors keep their relative order.
pub fn collapse_plural_variants(
    tokens: Vec<String>,
    plural_canonical: &[String],
    pluralizer: &dyn Pluralizer,
) -> Vec<String> {
    let mut groups: Vec<VariantGroup> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for (position, token) in tokens.into_iter().enumerate() {
        let (head, last) = split_last_word(&token);
        let key = (head.to_string(), pluralizer.singular(last));
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(VariantGroup {
                head: key.0,
                singular: key.1,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].members.push((position, token));
    }

    let mut survivors: Vec<(usize, String)> = Vec::new();
    for group in groups {
        if plural_canonical.contains(&group.singular) {
            let canonical = join_words(&group.head, &pluralizer.plural(&group.singular));
            if group.members.len() > 1 || group.members[0].1 != canonical {
                debug!(
                    "Collapsing {:?} into plural canonical form {:?}",
                    group.members.iter().map(|(_, t)| t).collect::<Vec<_>>(),
                    canonical
                );
            }
            survivors.push((group.members[0].0, canonical));
            continue;
        }

        let singular_member = group
            .members
            .iter()
            .position(|(_, token)| split_last_word(token).1 == group.singular);

        match singular_member {
            Some(keep) if group.members.len() > 1 => {
                for (i, (_, token)) in group.members.iter().enumerate() {
                    if i != keep {
                        debug!(
                            "Dropping {:?}, plural variant of {:?}",
                            token, group.members[keep].1
                        );
                    }
                }
                let mut members = group.members;
                survivors.push(members.swap_remove(keep));
            }
            _ => survivors.extend(group.members),
        }
    }

    survivors.sort_by_key(|(position, _)| *position);
    survivors.into_iter().map(|(_, token)| token).collect()
}

/// Run both deduplication passes: exact, then plural/singular
pub fn deduplicate(
    tokens: Vec<String>,
    plural_canonical: &[String],
    pluralizer: &dyn Pluralizer,
) -> Vec<String> {
    collapse_plural_variants(dedup_exact(tokens), plural_canonical, pluralizer)
}
