use std::path::PathBuf;

use serde::Serialize;

use onto_model::{DataType, OntologyClass};

use crate::assembler::BASELINE_OBJECT_PROPERTY_COUNT;
use crate::pipeline::CompiledModel;

/// Links in a complete kingdom-to-species chain.
pub const MAX_HIERARCHY_LINKS: usize = 5;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub fields: usize,
    pub skipped_rows: usize,
    pub classes: usize,
    pub data_properties: usize,
    pub baseline_object_properties: usize,
    pub field_object_properties: usize,
    pub hierarchy_links: usize,
    pub individuals: usize,
    pub option_sets: usize,
    pub unmatched_option_sets: usize,
    pub enumeration_fields: usize,
    pub enumeration_fields_with_option_set: usize,
    pub completeness: f64,
    /// Filled in after emission.
    pub identifier_collisions: usize,
    pub reasoner_verdict: Option<String>,
    pub artifact: Option<PathBuf>,
}

impl RunSummary {
    pub fn from_model(model: &CompiledModel) -> Self {
        let enumerations: Vec<_> = model
            .fields
            .iter()
            .filter(|field| field.data_type == DataType::Enumeration)
            .collect();
        let backed = enumerations
            .iter()
            .filter(|field| field.option_set_values.is_some())
            .count();
        let classes = model.ontology.classes.len();
        let hierarchy_links = model.ontology.hierarchy.len();
        Self {
            fields: model.fields.len(),
            skipped_rows: model.skipped.len(),
            classes,
            data_properties: model.ontology.data_properties.len(),
            baseline_object_properties: BASELINE_OBJECT_PROPERTY_COUNT,
            field_object_properties: model.ontology.field_object_properties().count(),
            hierarchy_links,
            individuals: model.individuals.len(),
            option_sets: model.option_sets.len(),
            unmatched_option_sets: model.unmatched_option_sets.len(),
            enumeration_fields: enumerations.len(),
            enumeration_fields_with_option_set: backed,
            completeness: completeness_score(classes, enumerations.len(), backed, hierarchy_links),
            ..Self::default()
        }
    }

    pub fn object_properties(&self) -> usize {
        self.baseline_object_properties + self.field_object_properties
    }
}

/// Mean of class coverage, option-set coverage of enumeration fields and
/// hierarchy completeness, each in `[0, 1]`.
pub fn completeness_score(
    populated_classes: usize,
    enumeration_fields: usize,
    backed_enumerations: usize,
    hierarchy_links: usize,
) -> f64 {
    let ratio = |part: usize, whole: usize| (part as f64 / whole as f64).clamp(0.0, 1.0);
    let class_coverage = ratio(populated_classes, OntologyClass::ALL.len());
    let enumeration_coverage = if enumeration_fields == 0 {
        1.0
    } else {
        ratio(backed_enumerations, enumeration_fields)
    };
    let hierarchy = ratio(hierarchy_links, MAX_HIERARCHY_LINKS);
    (class_coverage + enumeration_coverage + hierarchy) / 3.0
}
