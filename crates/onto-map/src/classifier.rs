//! Field classification: one raw row in, one [`FieldDefinition`] out.

use tracing::{debug, warn};

use onto_model::{
    DataType, FieldDefinition, FieldRow, IndividualClass, OptionSetMap, SkippedRow, SourceType,
};
use onto_normalization::camel_case;

use crate::option_sets::find_option_set;
use crate::rules::{
    ClassRuleSet, MatchedBy, infer_data_type, infer_value_class, names_enumerable_entity,
    taxonomic_level,
};
use crate::utils::{is_blank_cell, is_marked, normalize_text, split_option_values};

/// Schema fields that are always required.
const CORE_IDENTITY_FIELDS: &[&str] = &["taxon id", "species", "scientific name", "family", "genus"];

/// Result of classifying one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Field(Box<FieldDefinition>),
    Skipped(SkippedRow),
}

impl RowOutcome {
    pub fn into_field(self) -> Option<FieldDefinition> {
        match self {
            RowOutcome::Field(field) => Some(*field),
            RowOutcome::Skipped(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldClassifier {
    rules: ClassRuleSet,
}

impl FieldClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ClassRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassRuleSet {
        &self.rules
    }

    /// Classifies one row, merging in its option set when one matches.
    ///
    /// Rows with a blank `field` or `schema_field` are skipped and logged.
    pub fn classify(&self, row: &FieldRow, option_sets: &OptionSetMap) -> RowOutcome {
        let field = row.field.trim();
        let schema_field = row.schema_field.trim();
        if is_blank_cell(field) || is_blank_cell(schema_field) {
            let reason = if is_blank_cell(field) {
                "missing field"
            } else {
                "missing schema field"
            };
            warn!(row = row.row, reason, "skipping malformed field row");
            return RowOutcome::Skipped(SkippedRow {
                row: row.row,
                reason: reason.to_string(),
            });
        }

        let ai_category = row.ai_category.trim();
        let combined = format!("{field} {schema_field} {ai_category}");
        let (ontology_class, matched_by) = self.rules.classify(&combined);

        let inline_values = if is_blank_cell(&row.option_set) {
            Vec::new()
        } else {
            split_option_values(&row.option_set)
        };
        let mut data_type = infer_data_type(&combined, inline_values.len());
        let mut constraints = (data_type == DataType::Enumeration).then(|| inline_values.clone());

        let matched_set = find_option_set(option_sets, field, schema_field);
        let option_set_values = matched_set.map(|(_, set)| set.values().to_vec());
        if let Some(values) = &option_set_values {
            data_type = DataType::Enumeration;
            if constraints.is_none() {
                constraints = Some(values.clone());
            }
        }

        let naming_text = format!("{field} {schema_field}");
        let creates_individuals = option_set_values.is_some() || names_enumerable_entity(&naming_text);
        let range_class = resolve_range_class(&naming_text, data_type, option_set_values.is_some());
        let is_hierarchical = taxonomic_level(schema_field).is_some();
        let required = is_required(&row.exists, schema_field);
        let source_type = SourceType::from_presence(is_marked(ai_category), is_marked(&row.manual_calc));

        let definition = FieldDefinition {
            original_field: field.to_string(),
            schema_field: schema_field.to_string(),
            property_name: camel_case(schema_field),
            ontology_class,
            data_type,
            required,
            source_type,
            constraints,
            creates_individuals,
            range_class,
            is_hierarchical,
            option_set_values,
        };
        debug!(
            row = row.row,
            schema_field,
            class = %definition.ontology_class,
            data_type = %definition.data_type,
            matched_by = %describe(&matched_by),
            option_set = matched_set.map(|(name, _)| name),
            "field classified"
        );
        RowOutcome::Field(Box::new(definition))
    }

    /// Classifies every row, returning definitions and skipped rows in order.
    pub fn classify_all(
        &self,
        rows: &[FieldRow],
        option_sets: &OptionSetMap,
    ) -> (Vec<FieldDefinition>, Vec<SkippedRow>) {
        let mut fields = Vec::with_capacity(rows.len());
        let mut skipped = Vec::new();
        for row in rows {
            match self.classify(row, option_sets) {
                RowOutcome::Field(field) => fields.push(*field),
                RowOutcome::Skipped(skip) => skipped.push(skip),
            }
        }
        (fields, skipped)
    }
}

/// Identifier and numeric fields stay literals. Otherwise keyword families
/// pick the range, and an attached option set without a keyword ranges over
/// generic enumerated values.
fn resolve_range_class(
    naming_text: &str,
    data_type: DataType,
    has_option_set: bool,
) -> Option<IndividualClass> {
    if matches!(data_type, DataType::Identifier | DataType::Numeric) {
        return None;
    }
    infer_value_class(naming_text)
        .or_else(|| has_option_set.then_some(IndividualClass::EnumeratedValue))
}

fn is_required(exists: &str, schema_field: &str) -> bool {
    let flag = normalize_text(exists);
    let flagged = flag == "req"
        || flag.contains("required")
        || flag.contains("mandatory");
    flagged || CORE_IDENTITY_FIELDS.contains(&normalize_text(schema_field).as_str())
}

fn describe(matched_by: &MatchedBy) -> String {
    match matched_by {
        MatchedBy::Rule(name) => format!("rule:{name}"),
        MatchedBy::Substring(needle) => format!("substring:{needle}"),
        MatchedBy::Fallback => "fallback".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onto_model::{OntologyClass, OptionSet};

    fn classify(row: FieldRow) -> FieldDefinition {
        FieldClassifier::new()
            .classify(&row, &OptionSetMap::new())
            .into_field()
            .unwrap()
    }

    #[test]
    fn required_from_exists_flag_or_core_field() {
        assert!(classify(FieldRow::new(2, "Family", "family")).required);
        assert!(classify(FieldRow::new(2, "Leaf", "leaf_type").with_exists("Required")).required);
        assert!(!classify(FieldRow::new(2, "Leaf", "leaf_type").with_exists("yes")).required);
    }

    #[test]
    fn source_type_from_columns() {
        let row = FieldRow::new(2, "Height", "max_height_meters")
            .with_ai_category("Morphology")
            .with_manual_calc("Derived from DBH");
        assert_eq!(classify(row).source_type, SourceType::Hybrid);
        let row = FieldRow::new(2, "Height", "max_height_meters").with_manual_calc("No");
        assert_eq!(classify(row).source_type, SourceType::DirectInput);
    }

    #[test]
    fn option_set_forces_enumeration() {
        let mut sets = OptionSetMap::new();
        sets.insert(
            "growth_form".to_string(),
            ["Tree", "Shrub"].into_iter().map(String::from).collect::<OptionSet>(),
        );
        let field = FieldClassifier::new()
            .classify(&FieldRow::new(3, "Growth Form", "growth_form"), &sets)
            .into_field()
            .unwrap();
        assert_eq!(field.data_type, DataType::Enumeration);
        assert_eq!(
            field.option_set_values.as_deref(),
            Some(&["Tree".to_string(), "Shrub".to_string()][..])
        );
        assert_eq!(field.constraints, field.option_set_values);
        assert_eq!(field.range_class, Some(IndividualClass::GrowthForm));
        assert!(field.creates_individuals);
        assert_eq!(field.ontology_class, OntologyClass::MorphologicalCharacteristics);
    }

    #[test]
    fn unkeyed_option_set_ranges_over_enumerated_values() {
        let mut sets = OptionSetMap::new();
        sets.insert(
            "leaf_type".to_string(),
            ["Simple", "Compound"].into_iter().map(String::from).collect::<OptionSet>(),
        );
        let field = FieldClassifier::new()
            .classify(&FieldRow::new(3, "Leaf type", "leaf_type"), &sets)
            .into_field()
            .unwrap();
        assert_eq!(field.range_class, Some(IndividualClass::EnumeratedValue));
    }

    #[test]
    fn blank_cells_skip_the_row() {
        let classifier = FieldClassifier::new();
        let sets = OptionSetMap::new();
        let outcome = classifier.classify(&FieldRow::new(7, "", "family"), &sets);
        assert_eq!(
            outcome,
            RowOutcome::Skipped(SkippedRow {
                row: 7,
                reason: "missing field".to_string()
            })
        );
        let outcome = classifier.classify(&FieldRow::new(8, "Family", "nan"), &sets);
        assert!(matches!(outcome, RowOutcome::Skipped(_)));
    }

    #[test]
    fn literal_fields_have_no_range() {
        let field = classify(FieldRow::new(2, "Taxon ID", "taxon_id"));
        assert_eq!(field.data_type, DataType::Identifier);
        assert_eq!(field.range_class, None);
        assert_eq!(field.property_name, "taxonId");
        assert!(field.required);
    }
}
