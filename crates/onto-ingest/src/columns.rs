//! Flexible header resolution for the field-definition sheet.

use rapidfuzz::distance::jaro_winkler;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Minimum Jaro-Winkler similarity for a near-miss header to be accepted.
pub const FUZZY_HEADER_THRESHOLD: f64 = 0.90;

/// Logical column names with the header spellings accepted for each,
/// already normalized.
const FIELD_ALIASES: &[&str] = &["field", "field name"];
const SCHEMA_FIELD_ALIASES: &[&str] = &["schema field revised", "schema field", "schema field name"];
const EXISTS_ALIASES: &[&str] = &["exists", "exist", "required"];
const MANUAL_CALC_ALIASES: &[&str] = &["manual calc", "manual calculation"];
const OPTION_SET_ALIASES: &[&str] = &["option set", "option sets", "options"];
const AI_CATEGORY_ALIASES: &[&str] = &["ai research category", "ai category", "research category"];

/// Column indices of the field-definition sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSheetColumns {
    pub field: usize,
    pub schema_field: usize,
    pub exists: Option<usize>,
    pub manual_calc: Option<usize>,
    pub option_set: Option<usize>,
    pub ai_category: Option<usize>,
}

/// Lowercases and reduces every non-alphanumeric run to one space.
fn normalize_header(header: &str) -> String {
    header
        .to_lowercase()
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

struct Resolver {
    normalized: Vec<String>,
    claimed: Vec<bool>,
}

impl Resolver {
    fn new(headers: &[String]) -> Self {
        Self {
            normalized: headers.iter().map(|header| normalize_header(header)).collect(),
            claimed: vec![false; headers.len()],
        }
    }

    fn exact(&mut self, aliases: &[&str]) -> Option<usize> {
        // Alias order is preference order.
        let index = aliases.iter().find_map(|alias| {
            self.normalized
                .iter()
                .enumerate()
                .find(|(idx, header)| !self.claimed[*idx] && header == alias)
                .map(|(idx, _)| idx)
        })?;
        self.claimed[index] = true;
        Some(index)
    }

    fn fuzzy(&mut self, logical: &str, aliases: &[&str]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, header) in self.normalized.iter().enumerate() {
            if self.claimed[idx] || header.is_empty() {
                continue;
            }
            for alias in aliases {
                let score = jaro_winkler::similarity(header.chars(), alias.chars());
                if score >= FUZZY_HEADER_THRESHOLD && best.is_none_or(|(_, top)| score > top) {
                    best = Some((idx, score));
                }
            }
        }
        let (index, score) = best?;
        debug!(column = logical, header = %self.normalized[index], score, "fuzzy header match");
        self.claimed[index] = true;
        Some(index)
    }
}

impl FieldSheetColumns {
    /// Resolves the six logical columns from a header row.
    ///
    /// Every column is first matched exactly on its normalized spelling;
    /// columns still unresolved then take the closest unclaimed header
    /// above [`FUZZY_HEADER_THRESHOLD`]. `field` and the schema field
    /// column are mandatory.
    pub fn resolve(headers: &[String]) -> Result<Self> {
        let columns: [(&'static str, &[&str]); 6] = [
            ("field", FIELD_ALIASES),
            ("schema field (revised)", SCHEMA_FIELD_ALIASES),
            ("exists", EXISTS_ALIASES),
            ("manual calc", MANUAL_CALC_ALIASES),
            ("option set", OPTION_SET_ALIASES),
            ("ai research category", AI_CATEGORY_ALIASES),
        ];
        let mut resolver = Resolver::new(headers);
        let mut found: [Option<usize>; 6] = [None; 6];
        for (slot, (_, aliases)) in found.iter_mut().zip(columns.iter()) {
            *slot = resolver.exact(aliases);
        }
        for (slot, (logical, aliases)) in found.iter_mut().zip(columns.iter()) {
            if slot.is_none() {
                *slot = resolver.fuzzy(logical, aliases);
            }
        }

        let missing = |column: &'static str| IngestError::MissingColumn {
            column,
            found: headers.to_vec(),
        };
        let [field, schema_field, exists, manual_calc, option_set, ai_category] = found;
        Ok(Self {
            field: field.ok_or_else(|| missing(columns[0].0))?,
            schema_field: schema_field.ok_or_else(|| missing(columns[1].0))?,
            exists,
            manual_calc,
            option_set,
            ai_category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn resolves_canonical_headers_in_any_order() {
        let columns = FieldSheetColumns::resolve(&headers(&[
            "AI Research Category",
            "Option Set",
            "Schema Field (revised)",
            "Field",
            "Exists",
            "Manual Calc",
        ]))
        .unwrap();
        assert_eq!(columns.field, 3);
        assert_eq!(columns.schema_field, 2);
        assert_eq!(columns.exists, Some(4));
        assert_eq!(columns.manual_calc, Some(5));
        assert_eq!(columns.option_set, Some(1));
        assert_eq!(columns.ai_category, Some(0));
    }

    #[test]
    fn accepts_snake_case_and_near_misses() {
        let columns =
            FieldSheetColumns::resolve(&headers(&["field", "schema_field", "Option Sett"])).unwrap();
        assert_eq!(columns.field, 0);
        assert_eq!(columns.schema_field, 1);
        assert_eq!(columns.option_set, Some(2));
        assert_eq!(columns.exists, None);
    }

    #[test]
    fn missing_schema_field_is_an_error() {
        let err = FieldSheetColumns::resolve(&headers(&["Field", "Notes"])).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingColumn {
                column: "schema field (revised)",
                ..
            }
        ));
    }
}
