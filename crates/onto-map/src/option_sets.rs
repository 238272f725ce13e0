//! Option-set sheet processing.

use tracing::debug;

use onto_model::{OptionSet, OptionSetMap, OptionSheet};

use crate::utils::{is_blank_cell, normalize_text};

/// Builds the option-set map from a ragged option sheet.
///
/// Each column header names an option set; non-blank cells are its members.
/// Columns are independent of each other and no row alignment is assumed.
/// Cells are stored as given and duplicates are dropped by exact comparison
/// of that raw value, keeping the first occurrence. Columns with a blank header are ignored; a header seen
/// twice extends the existing set.
pub fn build_option_sets(sheet: &OptionSheet) -> OptionSetMap {
    let mut sets = OptionSetMap::new();
    for column in &sheet.columns {
        let name = column.name.trim();
        if name.is_empty() {
            continue;
        }
        let set = sets.entry(name.to_string()).or_insert_with(OptionSet::new);
        for cell in &column.cells {
            if is_blank_cell(cell) {
                continue;
            }
            set.push(cell.as_str());
        }
        debug!(option_set = name, count = set.count(), "option set built");
    }
    sets.retain(|_, set| !set.is_empty());
    sets
}

/// Finds the option set for a field by exact `field` key, exact
/// `schema_field` key, then normalized comparison of either.
pub fn find_option_set<'a>(
    sets: &'a OptionSetMap,
    field: &str,
    schema_field: &str,
) -> Option<(&'a str, &'a OptionSet)> {
    for key in [field.trim(), schema_field.trim()] {
        if let Some((name, set)) = sets.get_key_value(key) {
            return Some((name.as_str(), set));
        }
    }
    let wanted = [normalize_text(field), normalize_text(schema_field)];
    sets.iter()
        .find(|(name, _)| {
            let normalized = normalize_text(name);
            !normalized.is_empty() && wanted.contains(&normalized)
        })
        .map(|(name, set)| (name.as_str(), set))
}
