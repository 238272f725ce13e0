use onto_map::{FieldClassifier, RowOutcome, build_option_sets};
use onto_model::{
    DataType, FieldRow, IndividualClass, OntologyClass, OptionSetMap, OptionSheet, SourceType,
};

fn classify(field: &str, schema_field: &str) -> onto_model::FieldDefinition {
    FieldClassifier::new()
        .classify(&FieldRow::new(2, field, schema_field), &OptionSetMap::new())
        .into_field()
        .expect("row should classify")
}

#[test]
fn known_fields_land_in_expected_classes() {
    assert_eq!(
        classify("Scientific name", "scientific_name").ontology_class,
        OntologyClass::TaxonomicRank
    );
    assert_eq!(
        classify("Native countries", "countries_native").ontology_class,
        OntologyClass::GeographicDistribution
    );
    assert_eq!(
        classify("Conservation status", "conservation_status").ontology_class,
        OntologyClass::ConservationInformation
    );

    let height = classify("Max height", "max_height_meters");
    assert_eq!(height.ontology_class, OntologyClass::MorphologicalCharacteristics);
    assert_eq!(height.data_type, DataType::Numeric);
    assert_eq!(height.range_class, None);
}

#[test]
fn classification_is_total_for_unrecognized_text() {
    for (field, schema) in [("Notes", "notes"), ("Zzz", "qqq"), ("Ω", "ß")] {
        let definition = classify(field, schema);
        assert!(OntologyClass::ALL.contains(&definition.ontology_class));
    }
}

#[test]
fn inline_option_values_make_an_enumeration() {
    let row = FieldRow::new(4, "Conservation status", "conservation_status")
        .with_option_set("Least Concern, Endangered, Critical");
    let definition = FieldClassifier::new()
        .classify(&row, &OptionSetMap::new())
        .into_field()
        .unwrap();
    assert_eq!(definition.data_type, DataType::Enumeration);
    assert_eq!(
        definition.constraints.as_deref(),
        Some(&["Least Concern".to_string(), "Endangered".into(), "Critical".into()][..])
    );
    assert_eq!(definition.range_class, Some(IndividualClass::ConservationStatus));
    assert!(definition.creates_individuals);
}

#[test]
fn country_list_joined_with_option_sheet() {
    let sheet = OptionSheet::new().with_column("countries_native", ["France", "Spain"]);
    let sets = build_option_sets(&sheet);
    let row = FieldRow::new(6, "Native countries", "countries_native").with_ai_category("Geography");
    let definition = FieldClassifier::new()
        .classify(&row, &sets)
        .into_field()
        .unwrap();
    assert_eq!(definition.data_type, DataType::Enumeration);
    assert_eq!(definition.range_class, Some(IndividualClass::Country));
    assert_eq!(definition.source_type, SourceType::AiGenerated);
    assert_eq!(definition.property_name, "countriesNative");
    assert!(!definition.required);
}

#[test]
fn classify_all_keeps_order_and_reports_skips() {
    let rows = vec![
        FieldRow::new(2, "Family", "family"),
        FieldRow::new(3, "", ""),
        FieldRow::new(4, "Genus", "genus"),
    ];
    let (fields, skipped) = FieldClassifier::new().classify_all(&rows, &OptionSetMap::new());
    let names: Vec<_> = fields.iter().map(|f| f.schema_field.as_str()).collect();
    assert_eq!(names, ["family", "genus"]);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].row, 3);
    assert!(fields.iter().all(|f| f.is_hierarchical));

    let outcome = FieldClassifier::new().classify(&rows[1], &OptionSetMap::new());
    assert!(matches!(outcome, RowOutcome::Skipped(_)));
}
