//! Groups classified fields into classes, properties and rank links.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use onto_map::{infer_primitive_range, is_multi_valued, taxonomic_level};
use onto_model::{
    ClassRef, DataProperty, DataType, FieldDefinition, HierarchicalRelationship, IndividualClass,
    ObjectProperty, OntologyClass, TaxonomicLevel,
};

/// Number of object properties present regardless of input.
pub const BASELINE_OBJECT_PROPERTY_COUNT: usize = 6;

/// A populated semantic class and the schema fields that belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OntologyClassBucket {
    pub class: OntologyClass,
    pub fields: Vec<String>,
    pub description: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssembledOntology {
    /// Populated classes in canonical class order.
    pub classes: Vec<OntologyClassBucket>,
    pub data_properties: Vec<DataProperty>,
    /// Baseline properties first, then one per relationship field.
    pub object_properties: Vec<ObjectProperty>,
    pub hierarchy: Vec<HierarchicalRelationship>,
}

impl AssembledOntology {
    pub fn field_object_properties(&self) -> impl Iterator<Item = &ObjectProperty> {
        self.object_properties.iter().filter(|prop| !prop.is_baseline())
    }
}

/// Object properties that keep the ontology navigable with sparse input.
pub fn baseline_object_properties() -> Vec<ObjectProperty> {
    let taxon = ClassRef::Semantic(OntologyClass::TaxonomicRank);
    let links: [(&str, ClassRef, bool); BASELINE_OBJECT_PROPERTY_COUNT] = [
        ("hasParentTaxon", taxon, true),
        ("hasFamily", taxon, true),
        ("hasGenus", taxon, true),
        ("nativeToCountry", IndividualClass::Country.into(), false),
        ("foundInBiome", IndividualClass::Biome.into(), false),
        (
            "hasConservationStatus",
            IndividualClass::ConservationStatus.into(),
            true,
        ),
    ];
    links
        .into_iter()
        .map(|(name, range, functional)| ObjectProperty {
            name: name.to_string(),
            domain: OntologyClass::TaxonomicRank,
            range,
            functional,
            source_field: None,
        })
        .collect()
}

fn data_property(field: &FieldDefinition) -> DataProperty {
    DataProperty {
        name: field.property_name.clone(),
        domain: field.ontology_class,
        range: infer_primitive_range(field),
        functional: field.data_type != DataType::List,
        required: field.required,
        constraints: field.constraints.clone(),
        source_field: field.schema_field.clone(),
    }
}

fn object_property(field: &FieldDefinition, range: IndividualClass) -> ObjectProperty {
    ObjectProperty {
        name: field.property_name.clone(),
        domain: field.ontology_class,
        range: range.into(),
        functional: !is_multi_valued(field),
        source_field: Some(field.schema_field.clone()),
    }
}

/// Links adjacent taxonomic ranks that are both present.
///
/// The first field seen for a rank represents it. A missing rank breaks
/// the chain: no link is made across the gap.
pub fn infer_hierarchy(fields: &[FieldDefinition]) -> Vec<HierarchicalRelationship> {
    let mut ranks: BTreeMap<TaxonomicLevel, &str> = BTreeMap::new();
    for field in fields.iter().filter(|field| field.is_hierarchical) {
        if let Some(level) = taxonomic_level(&field.schema_field) {
            ranks.entry(level).or_insert(field.schema_field.as_str());
        }
    }
    TaxonomicLevel::ORDERED
        .windows(2)
        .filter_map(|pair| {
            let (parent_level, child_level) = (pair[0], pair[1]);
            let parent = ranks.get(&parent_level)?;
            let child = ranks.get(&child_level)?;
            Some(HierarchicalRelationship {
                parent_field: (*parent).to_string(),
                child_field: (*child).to_string(),
                parent_level,
                child_level,
                property: HierarchicalRelationship::property_name_for(child_level),
            })
        })
        .collect()
}

pub fn assemble(fields: &[FieldDefinition]) -> AssembledOntology {
    let mut grouped: BTreeMap<OntologyClass, Vec<String>> = BTreeMap::new();
    let mut data_properties = Vec::new();
    let mut object_properties = baseline_object_properties();

    for field in fields {
        grouped
            .entry(field.ontology_class)
            .or_default()
            .push(field.schema_field.clone());
        match field.range_class {
            Some(range) => object_properties.push(object_property(field, range)),
            None => data_properties.push(data_property(field)),
        }
    }

    let classes: Vec<OntologyClassBucket> = OntologyClass::ALL
        .into_iter()
        .filter_map(|class| {
            let fields = grouped.remove(&class)?;
            Some(OntologyClassBucket {
                class,
                fields,
                description: class.description(),
            })
        })
        .collect();
    let hierarchy = infer_hierarchy(fields);

    debug!(
        classes = classes.len(),
        data_properties = data_properties.len(),
        object_properties = object_properties.len(),
        hierarchy = hierarchy.len(),
        "ontology assembled"
    );
    AssembledOntology {
        classes,
        data_properties,
        object_properties,
        hierarchy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onto_model::SourceType;

    fn field(schema_field: &str, class: OntologyClass) -> FieldDefinition {
        FieldDefinition {
            original_field: schema_field.to_string(),
            schema_field: schema_field.to_string(),
            property_name: schema_field.to_string(),
            ontology_class: class,
            data_type: DataType::String,
            required: false,
            source_type: SourceType::DirectInput,
            constraints: None,
            creates_individuals: false,
            range_class: None,
            is_hierarchical: taxonomic_level(schema_field).is_some(),
            option_set_values: None,
        }
    }

    #[test]
    fn baseline_is_always_present() {
        let ontology = assemble(&[]);
        assert!(ontology.classes.is_empty());
        assert_eq!(ontology.object_properties.len(), BASELINE_OBJECT_PROPERTY_COUNT);
        assert!(ontology.object_properties.iter().all(ObjectProperty::is_baseline));
        assert_eq!(ontology.field_object_properties().count(), 0);
    }

    #[test]
    fn gap_in_ranks_breaks_the_chain() {
        let fields = [
            field("kingdom", OntologyClass::TaxonomicRank),
            field("family", OntologyClass::TaxonomicRank),
            field("genus", OntologyClass::TaxonomicRank),
        ];
        let links = infer_hierarchy(&fields);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].parent_field, "family");
        assert_eq!(links[0].child_field, "genus");
        assert_eq!(links[0].property, "hasParentGenus");
    }

    #[test]
    fn full_chain_has_five_links() {
        let fields: Vec<_> = TaxonomicLevel::ORDERED
            .iter()
            .map(|level| field(level.keyword(), OntologyClass::TaxonomicRank))
            .collect();
        let links = infer_hierarchy(&fields);
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].property, "hasParentClass");
        assert_eq!(links[4].property, "hasParentSpecies");
    }

    #[test]
    fn camel_case_rank_fields_are_linked() {
        let fields = [
            field("familyName", OntologyClass::TaxonomicRank),
            field("genusName", OntologyClass::TaxonomicRank),
        ];
        let links = infer_hierarchy(&fields);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].parent_field, "familyName");
        assert_eq!(links[0].child_field, "genusName");
        assert_eq!(links[0].property, "hasParentGenus");
    }

    #[test]
    fn first_field_represents_its_rank() {
        let fields = [
            field("family", OntologyClass::TaxonomicRank),
            field("family_name", OntologyClass::TaxonomicRank),
            field("genus", OntologyClass::TaxonomicRank),
        ];
        let links = infer_hierarchy(&fields);
        assert_eq!(links[0].parent_field, "family");
    }

    #[test]
    fn relationship_fields_become_object_properties() {
        let mut countries = field("countries_native", OntologyClass::GeographicDistribution);
        countries.data_type = DataType::Enumeration;
        countries.range_class = Some(IndividualClass::Country);
        let fields = [field("scientific_name", OntologyClass::TaxonomicRank), countries];
        let ontology = assemble(&fields);

        assert_eq!(ontology.data_properties.len(), 1);
        let extra: Vec<_> = ontology.field_object_properties().collect();
        assert_eq!(extra.len(), 1);
        assert_eq!(extra[0].range, ClassRef::Value(IndividualClass::Country));
        assert!(!extra[0].functional);
        assert_eq!(
            ontology
                .classes
                .iter()
                .map(|bucket| bucket.class)
                .collect::<Vec<_>>(),
            [OntologyClass::TaxonomicRank, OntologyClass::GeographicDistribution]
        );
    }

    #[test]
    fn list_fields_are_not_functional() {
        let mut list = field("uses", OntologyClass::CulturalSignificance);
        list.data_type = DataType::List;
        let ontology = assemble(&[list, field("family", OntologyClass::TaxonomicRank)]);
        assert!(!ontology.data_properties[0].functional);
        assert!(ontology.data_properties[1].functional);
    }
}
