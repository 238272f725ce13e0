//! In-memory OWL document, ready for checking and serialization.
//!
//! All names are registry-assigned identifiers and all labels and comments
//! are already escaped for XML text.

use onto_model::PrimitiveRange;
use onto_normalization::Collision;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XsdDatatype {
    String,
    Decimal,
    Integer,
    Boolean,
}

impl XsdDatatype {
    pub fn local_name(&self) -> &'static str {
        match self {
            XsdDatatype::String => "string",
            XsdDatatype::Decimal => "decimal",
            XsdDatatype::Integer => "integer",
            XsdDatatype::Boolean => "boolean",
        }
    }

    pub fn iri(&self) -> String {
        format!("{XSD_NS}{}", self.local_name())
    }
}

impl From<PrimitiveRange> for XsdDatatype {
    fn from(range: PrimitiveRange) -> Self {
        match range {
            PrimitiveRange::String => XsdDatatype::String,
            PrimitiveRange::Numeric => XsdDatatype::Decimal,
            PrimitiveRange::Integer => XsdDatatype::Integer,
            PrimitiveRange::Boolean => XsdDatatype::Boolean,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwlClass {
    pub name: String,
    pub label: String,
    pub comment: Option<String>,
    /// `None` only for the root class.
    pub parent: Option<String>,
    /// Data properties every member must carry (`owl:minCardinality 1`).
    pub required_properties: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwlDataProperty {
    pub name: String,
    pub label: String,
    pub domain: String,
    pub range: XsdDatatype,
    pub functional: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwlObjectProperty {
    pub name: String,
    pub label: String,
    pub domain: String,
    pub range: String,
    pub functional: bool,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwlIndividual {
    pub name: String,
    pub class: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwlDocument {
    pub base_iri: String,
    pub label: String,
    pub version_info: String,
    pub root_class: String,
    pub classes: Vec<OwlClass>,
    pub data_properties: Vec<OwlDataProperty>,
    pub object_properties: Vec<OwlObjectProperty>,
    pub individuals: Vec<OwlIndividual>,
    /// Names the registry had to disambiguate while building the document.
    pub collisions: Vec<Collision>,
}

impl OwlDocument {
    /// Full IRI of a local name in this ontology's namespace.
    pub fn iri(&self, name: &str) -> String {
        format!("{}#{name}", self.base_iri)
    }

    pub fn class(&self, name: &str) -> Option<&OwlClass> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn individuals_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a OwlIndividual> {
        self.individuals.iter().filter(move |individual| individual.class == class)
    }
}
