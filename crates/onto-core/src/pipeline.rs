use std::collections::BTreeSet;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span};

use onto_map::{FieldClassifier, build_option_sets, find_option_set};
use onto_model::{
    FieldDefinition, FieldRow, NamedIndividual, OptionSetMap, OptionSheet, SkippedRow,
};

use crate::assembler::{AssembledOntology, assemble};
use crate::digest::input_digest;
use crate::individuals::generate_individuals;

/// Everything one compilation run produces before emission.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledModel {
    pub fields: Vec<FieldDefinition>,
    pub skipped: Vec<SkippedRow>,
    pub option_sets: OptionSetMap,
    /// Option sets no field claimed. Their values still become individuals.
    pub unmatched_option_sets: Vec<String>,
    pub ontology: AssembledOntology,
    pub individuals: Vec<NamedIndividual>,
    pub input_digest: String,
}

/// Compiles both sheets with the default classification rules.
pub fn compile(rows: &[FieldRow], option_sheet: &OptionSheet) -> CompiledModel {
    compile_with(&FieldClassifier::default(), rows, option_sheet)
}

pub fn compile_with(
    classifier: &FieldClassifier,
    rows: &[FieldRow],
    option_sheet: &OptionSheet,
) -> CompiledModel {
    let compile_span = info_span!("compile", rows = rows.len());
    let _compile_guard = compile_span.enter();
    let compile_start = Instant::now();

    let option_sets = info_span!("option_sets").in_scope(|| build_option_sets(option_sheet));

    let (fields, skipped) = info_span!("classify").in_scope(|| {
        let start = Instant::now();
        let (fields, skipped) = classifier.classify_all(rows, &option_sets);
        debug!(
            fields = fields.len(),
            skipped = skipped.len(),
            duration_ms = start.elapsed().as_millis(),
            "classification complete"
        );
        (fields, skipped)
    });

    let unmatched_option_sets = unmatched_option_sets(&fields, &option_sets);
    for name in &unmatched_option_sets {
        info!(option_set = %name, "option set has no matching field");
    }

    let ontology = info_span!("assemble").in_scope(|| assemble(&fields));
    let individuals =
        info_span!("individuals").in_scope(|| generate_individuals(&fields, &option_sets));
    let input_digest = input_digest(rows, option_sheet);

    info!(
        fields = fields.len(),
        skipped = skipped.len(),
        classes = ontology.classes.len(),
        individuals = individuals.len(),
        option_sets = option_sets.len(),
        duration_ms = compile_start.elapsed().as_millis(),
        "compile complete"
    );
    CompiledModel {
        fields,
        skipped,
        option_sets,
        unmatched_option_sets,
        ontology,
        individuals,
        input_digest,
    }
}

fn unmatched_option_sets(fields: &[FieldDefinition], option_sets: &OptionSetMap) -> Vec<String> {
    let matched: BTreeSet<&str> = fields
        .iter()
        .filter_map(|field| {
            find_option_set(option_sets, &field.original_field, &field.schema_field)
                .map(|(name, _)| name)
        })
        .collect();
    option_sets
        .keys()
        .filter(|name| !matched.contains(name.as_str()))
        .cloned()
        .collect()
}
