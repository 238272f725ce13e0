use std::collections::HashSet;

use tracing::debug;

use onto_map::infer_value_class;
use onto_model::{FieldDefinition, IndividualClass, IndividualSource, NamedIndividual, OptionSetMap};
use onto_normalization::{sanitize_content, sanitize_identifier};

fn individual(
    value: &str,
    class: IndividualClass,
    source_field: &str,
    source: IndividualSource,
) -> NamedIndividual {
    NamedIndividual {
        name: sanitize_identifier(value),
        class,
        label: sanitize_content(value),
        original_value: value.to_string(),
        source_field: source_field.to_string(),
        source,
    }
}

fn field_value_class(field: &FieldDefinition) -> IndividualClass {
    field
        .range_class
        .or_else(|| infer_value_class(&format!("{} {}", field.original_field, field.schema_field)))
        .unwrap_or(IndividualClass::EnumeratedValue)
}

/// Generates one individual per enumerated value.
///
/// Field option sets come first, then every entry of the option-set map,
/// whether or not a field claimed it. Individuals are unique by
/// `(original_value, class)`; the first source to produce one keeps it.
/// Distinct values that sanitize to the same name are all kept and left
/// for the identifier registry to suffix.
pub fn generate_individuals(
    fields: &[FieldDefinition],
    option_sets: &OptionSetMap,
) -> Vec<NamedIndividual> {
    let from_fields = fields.iter().flat_map(|field| {
        let class = field_value_class(field);
        field
            .option_set_values
            .iter()
            .flatten()
            .map(move |value| {
                individual(value, class, &field.schema_field, IndividualSource::OptionSet)
            })
    });
    let from_sets = option_sets.iter().flat_map(|(name, set)| {
        let class = infer_value_class(name).unwrap_or(IndividualClass::EnumeratedValue);
        set.values()
            .iter()
            .map(move |value| individual(value, class, name, IndividualSource::DirectOptionSet))
    });

    let mut seen: HashSet<(String, IndividualClass)> = HashSet::new();
    let mut individuals = Vec::new();
    let mut duplicates = 0usize;
    for candidate in from_fields.chain(from_sets) {
        if seen.insert((candidate.original_value.clone(), candidate.class)) {
            individuals.push(candidate);
        } else {
            duplicates += 1;
        }
    }
    debug!(
        individuals = individuals.len(),
        duplicates, "named individuals generated"
    );
    individuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use onto_model::{DataType, OntologyClass, OptionSet, SourceType};

    fn set(values: &[&str]) -> OptionSet {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn enum_field(schema_field: &str, range: Option<IndividualClass>, values: &[&str]) -> FieldDefinition {
        FieldDefinition {
            original_field: schema_field.to_string(),
            schema_field: schema_field.to_string(),
            property_name: schema_field.to_string(),
            ontology_class: OntologyClass::GeographicDistribution,
            data_type: DataType::Enumeration,
            required: false,
            source_type: SourceType::DirectInput,
            constraints: None,
            creates_individuals: true,
            range_class: range,
            is_hierarchical: false,
            option_set_values: Some(values.iter().map(|v| (*v).to_string()).collect()),
        }
    }

    #[test]
    fn same_value_in_two_sets_yields_one_individual() {
        let mut sets = OptionSetMap::new();
        sets.insert("countries_native".to_string(), set(&["France", "Spain"]));
        sets.insert("countries_introduced".to_string(), set(&["France", "Chile"]));
        let individuals = generate_individuals(&[], &sets);

        let france: Vec<_> = individuals.iter().filter(|i| i.name == "France").collect();
        assert_eq!(france.len(), 1);
        assert_eq!(france[0].class, IndividualClass::Country);
        assert_eq!(france[0].source_field, "countries_introduced");
        assert_eq!(individuals.len(), 3);
    }

    #[test]
    fn distinct_values_with_the_same_name_are_both_kept() {
        let mut sets = OptionSetMap::new();
        sets.insert(
            "countries_native".to_string(),
            set(&["Côte d'Ivoire", "Cote d Ivoire", "北京", "東京"]),
        );
        let individuals = generate_individuals(&[], &sets);

        assert_eq!(individuals.len(), 4);
        let names: Vec<_> = individuals.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Cote_d_Ivoire", "Cote_d_Ivoire", "UnknownValue", "UnknownValue"]);
        let originals: Vec<_> = individuals.iter().map(|i| i.original_value.as_str()).collect();
        assert_eq!(originals, ["Côte d'Ivoire", "Cote d Ivoire", "北京", "東京"]);
    }

    #[test]
    fn field_values_win_provenance() {
        let mut sets = OptionSetMap::new();
        sets.insert("countries_native".to_string(), set(&["France"]));
        let fields = [enum_field("countries_native", Some(IndividualClass::Country), &["France"])];
        let individuals = generate_individuals(&fields, &sets);
        assert_eq!(individuals.len(), 1);
        assert_eq!(individuals[0].source, IndividualSource::OptionSet);
    }

    #[test]
    fn same_name_in_different_classes_is_kept() {
        let mut sets = OptionSetMap::new();
        sets.insert("biome".to_string(), set(&["Forest"]));
        sets.insert("habitat".to_string(), set(&["Forest"]));
        let individuals = generate_individuals(&[], &sets);
        assert_eq!(individuals.len(), 2);
    }

    #[test]
    fn unkeyed_sets_are_enumerated_values() {
        let mut sets = OptionSetMap::new();
        sets.insert("leaf_type".to_string(), set(&["Simple & Compound", "Needle-leaf"]));
        let individuals = generate_individuals(&[], &sets);
        assert_eq!(individuals[0].class, IndividualClass::EnumeratedValue);
        assert_eq!(individuals[0].name, "Simple_And_Compound");
        assert_eq!(individuals[0].label, "Simple &amp; Compound");
        assert_eq!(individuals[0].original_value, "Simple & Compound");
        assert_eq!(individuals[1].name, "Needle_leaf");
        assert_eq!(individuals[1].source, IndividualSource::DirectOptionSet);
    }
}
