//! One-pass translation of the compiled IR into an [`OwlDocument`].

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use onto_core::CompiledModel;
use onto_model::{ClassRef, CompileOptions, OntologyClass};
use onto_normalization::{IdentifierRegistry, sanitize_content};

use crate::document::{OwlClass, OwlDataProperty, OwlDocument, OwlIndividual, OwlObjectProperty};

/// Splits a PascalCase name into words: `ConservationStatus` -> `Conservation Status`.
fn spaced(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (idx, ch) in name.chars().enumerate() {
        if idx > 0 && ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

struct Namespace {
    registry: IdentifierRegistry,
}

impl Namespace {
    fn class(&mut self, class: ClassRef) -> String {
        let name = class.name();
        self.registry.register(&format!("class:{name}"), name)
    }
}

/// Every class the document mentions, semantic classes first so that a
/// value class sharing a semantic class's name reuses its declaration.
fn referenced_classes(model: &CompiledModel) -> Vec<ClassRef> {
    let ontology = &model.ontology;
    let semantic = ontology
        .classes
        .iter()
        .map(|bucket| bucket.class)
        .chain(ontology.data_properties.iter().map(|prop| prop.domain))
        .chain(ontology.object_properties.iter().map(|prop| prop.domain))
        .chain(
            (!ontology.hierarchy.is_empty())
                .then_some(OntologyClass::TaxonomicRank),
        )
        .map(ClassRef::from);
    let values = ontology
        .object_properties
        .iter()
        .map(|prop| prop.range)
        .chain(model.individuals.iter().map(|individual| individual.class.into()));

    let mut seen = BTreeSet::new();
    semantic
        .chain(values)
        .filter(|class| seen.insert(class.name()))
        .collect()
}

fn declare_class(
    id: String,
    class: ClassRef,
    root: &str,
    required: &mut BTreeMap<String, Vec<String>>,
) -> OwlClass {
    let (label, comment) = match class {
        ClassRef::Semantic(semantic) => (
            semantic.label().to_string(),
            Some(sanitize_content(semantic.description())),
        ),
        ClassRef::Value(value) => (spaced(value.as_str()), None),
    };
    OwlClass {
        required_properties: required.remove(&id).unwrap_or_default(),
        name: id,
        label: sanitize_content(&label),
        comment,
        parent: Some(root.to_string()),
    }
}

/// Builds the OWL document for `model`.
///
/// Names are assigned by a fresh registry in a fixed order: root class,
/// classes, data properties, object properties, rank links, individuals.
/// Earlier entities keep the plain name when two sanitize alike.
pub fn build_document(model: &CompiledModel, options: &CompileOptions) -> OwlDocument {
    let mut ns = Namespace {
        registry: IdentifierRegistry::new(options.collision_suffix),
    };
    let root = ns.registry.register("class:root", &options.root_class);
    let classes: Vec<(String, ClassRef)> = referenced_classes(model)
        .into_iter()
        .map(|class| (ns.class(class), class))
        .collect();

    let ontology = &model.ontology;
    let mut required: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let data_properties: Vec<OwlDataProperty> = ontology
        .data_properties
        .iter()
        .enumerate()
        .map(|(idx, prop)| {
            let name = ns
                .registry
                .register(&format!("property:data:{idx}:{}", prop.source_field), &prop.name);
            let domain = ns.class(prop.domain.into());
            if prop.required {
                required.entry(domain.clone()).or_default().push(name.clone());
            }
            let comment = prop
                .constraints
                .as_ref()
                .filter(|values| !values.is_empty())
                .map(|values| sanitize_content(&format!("Allowed values: {}", values.join(", "))));
            OwlDataProperty {
                label: sanitize_content(&prop.source_field),
                name,
                domain,
                range: prop.range.into(),
                functional: prop.functional,
                comment,
            }
        })
        .collect();

    let mut object_properties: Vec<OwlObjectProperty> = ontology
        .object_properties
        .iter()
        .enumerate()
        .map(|(idx, prop)| {
            let source = match &prop.source_field {
                Some(field) => format!("property:object:{idx}:{field}"),
                None => format!("property:object:{}", prop.name),
            };
            OwlObjectProperty {
                name: ns.registry.register(&source, &prop.name),
                label: sanitize_content(prop.source_field.as_deref().unwrap_or(&prop.name)),
                domain: ns.class(prop.domain.into()),
                range: ns.class(prop.range),
                functional: prop.functional,
                comment: None,
            }
        })
        .collect();
    for link in &ontology.hierarchy {
        let taxon = ns.class(OntologyClass::TaxonomicRank.into());
        object_properties.push(OwlObjectProperty {
            name: ns
                .registry
                .register(&format!("property:hierarchy:{}", link.property), &link.property),
            label: sanitize_content(&link.property),
            domain: taxon.clone(),
            range: taxon,
            functional: true,
            comment: Some(sanitize_content(&format!(
                "Links {} ({}) to its parent {} ({})",
                link.child_field, link.child_level, link.parent_field, link.parent_level
            ))),
        });
    }

    let individuals: Vec<OwlIndividual> = model
        .individuals
        .iter()
        .map(|individual| OwlIndividual {
            name: ns.registry.register(
                &format!("individual:{}:{}", individual.class, individual.original_value),
                &individual.name,
            ),
            class: ns.class(individual.class.into()),
            label: individual.label.clone(),
        })
        .collect();

    let mut owl_classes = Vec::with_capacity(classes.len() + 1);
    owl_classes.push(OwlClass {
        name: root.clone(),
        label: sanitize_content(&spaced(&root)),
        comment: Some(sanitize_content(&format!(
            "Common root of every class in the {} ontology",
            options.ontology_name.trim()
        ))),
        parent: None,
        required_properties: Vec::new(),
    });
    for (id, class) in classes {
        owl_classes.push(declare_class(id, class, &root, &mut required));
    }

    let collisions = ns.registry.collisions().to_vec();
    if !collisions.is_empty() {
        info!(collisions = collisions.len(), "identifier collisions resolved");
    }
    debug!(
        classes = owl_classes.len(),
        data_properties = data_properties.len(),
        object_properties = object_properties.len(),
        individuals = individuals.len(),
        "owl document built"
    );
    OwlDocument {
        base_iri: options.base_iri.trim_end_matches('/').to_string(),
        label: sanitize_content(options.ontology_name.trim()),
        version_info: model.input_digest.clone(),
        root_class: root,
        classes: owl_classes,
        data_properties,
        object_properties,
        individuals,
        collisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_splits_pascal_case() {
        assert_eq!(spaced("ConservationStatus"), "Conservation Status");
        assert_eq!(spaced("Country"), "Country");
        assert_eq!(spaced("BiodiversityEntity"), "Biodiversity Entity");
    }
}
