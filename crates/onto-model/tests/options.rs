//! Tests for compile options.

use std::time::Duration;

use onto_model::{CollisionSuffix, CompileOptions, ConsistencyPolicy, ModelError};

#[test]
fn defaults_are_valid() {
    let options = CompileOptions::default();
    options.validate().unwrap();
    assert_eq!(options.consistency_policy, ConsistencyPolicy::FailOpen);
    assert_eq!(options.reasoner_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(options.artifact_file_name(), "biodiversity.owl");
}

#[test]
fn rejects_empty_name() {
    let options = CompileOptions::default().with_ontology_name("  ");
    assert!(matches!(
        options.validate(),
        Err(ModelError::EmptyOntologyName)
    ));
}

#[test]
fn rejects_names_that_leave_the_output_dir() {
    for name in ["../trees", "out/trees", r"out\trees", ".."] {
        let options = CompileOptions::default().with_ontology_name(name);
        assert!(
            matches!(
                options.validate(),
                Err(ModelError::OntologyNameNotAFileName(_))
            ),
            "{name}"
        );
    }
    let dotted = CompileOptions::default().with_ontology_name("trees.v2");
    dotted.validate().unwrap();
}

#[test]
fn rejects_base_iri_with_fragment() {
    let options = CompileOptions::default().with_base_iri("http://example.org/onto#");
    assert!(matches!(
        options.validate(),
        Err(ModelError::InvalidBaseIri { .. })
    ));
}

#[test]
fn rejects_base_iri_without_scheme() {
    let options = CompileOptions::default().with_base_iri("example.org/onto");
    assert!(options.validate().is_err());
}

#[test]
fn rejects_root_class_starting_with_digit() {
    let mut options = CompileOptions::default();
    options.root_class = "1Root".to_string();
    assert!(matches!(
        options.validate(),
        Err(ModelError::InvalidRootClass(_))
    ));
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let options: CompileOptions = toml::from_str(
        r#"
        ontology_name = "trees"
        consistency_policy = "fail-closed"
        collision_suffix = "hash"
        "#,
    )
    .unwrap();
    assert_eq!(options.ontology_name, "trees");
    assert_eq!(options.consistency_policy, ConsistencyPolicy::FailClosed);
    assert_eq!(options.collision_suffix, CollisionSuffix::Hash);
    assert_eq!(options.root_class, "BiodiversityEntity");
    assert_eq!(options.reasoner_timeout_secs, Some(30));
}

#[test]
fn timeout_can_be_disabled() {
    let options = CompileOptions::default().with_reasoner_timeout(None);
    assert_eq!(options.reasoner_timeout(), None);
}
