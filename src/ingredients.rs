use std::collections::BTreeMap;

use log::debug;

/// One-hot ingredient indicators for a record.
///
/// Every known ingredient column starts at 0 and is set to 1 when the record
/// mentions it. Ingredients without a column are ignored.
pub fn ingredient_flags<S: AsRef<str>>(columns: &[S], found: &[S]) -> BTreeMap<String, u8> {
    let mut flags: BTreeMap<String, u8> = columns
        .iter()
        .map(|column| (column.as_ref().trim().to_string(), 0))
        .collect();

    for ingredient in found {
        let ingredient = ingredient.as_ref().trim();
        match flags.get_mut(ingredient) {
            Some(flag) => *flag = 1,
            None => debug!("No ingredient column for {:?}", ingredient),
        }
    }

    flags
}
