//! RDF/XML serialization of an [`OwlDocument`].

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::document::{
    OWL_NS, OwlClass, OwlDataProperty, OwlDocument, OwlObjectProperty, RDF_NS, RDFS_NS, XSD_NS,
};
use crate::error::{EmitError, Result};

struct RdfWriter<W: Write> {
    xml: Writer<W>,
}

impl<W: Write> RdfWriter<W> {
    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.xml.write_event(event).map_err(EmitError::xml)
    }

    fn start(&mut self, element: BytesStart<'_>) -> Result<()> {
        self.event(Event::Start(element))
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn about(&mut self, name: &str, iri: &str) -> Result<()> {
        let mut element = BytesStart::new(name);
        element.push_attribute(("rdf:about", iri));
        self.start(element)
    }

    fn resource(&mut self, name: &str, iri: &str) -> Result<()> {
        let mut element = BytesStart::new(name);
        element.push_attribute(("rdf:resource", iri));
        self.event(Event::Empty(element))
    }

    /// `text` must already be escaped.
    fn escaped_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(BytesStart::new(name))?;
        self.event(Event::Text(BytesText::from_escaped(text)))?;
        self.end(name)
    }

    fn plain_text(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(BytesStart::new(name))?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }
}

fn write_class<W: Write>(out: &mut RdfWriter<W>, doc: &OwlDocument, class: &OwlClass) -> Result<()> {
    out.about("owl:Class", &doc.iri(&class.name))?;
    out.escaped_text("rdfs:label", &class.label)?;
    if let Some(comment) = &class.comment {
        out.escaped_text("rdfs:comment", comment)?;
    }
    if let Some(parent) = &class.parent {
        out.resource("rdfs:subClassOf", &doc.iri(parent))?;
    }
    for property in &class.required_properties {
        out.start(BytesStart::new("rdfs:subClassOf"))?;
        out.start(BytesStart::new("owl:Restriction"))?;
        out.resource("owl:onProperty", &doc.iri(property))?;
        let mut cardinality = BytesStart::new("owl:minCardinality");
        let datatype = format!("{XSD_NS}nonNegativeInteger");
        cardinality.push_attribute(("rdf:datatype", datatype.as_str()));
        out.start(cardinality)?;
        out.event(Event::Text(BytesText::new("1")))?;
        out.end("owl:minCardinality")?;
        out.end("owl:Restriction")?;
        out.end("rdfs:subClassOf")?;
    }
    out.end("owl:Class")
}

fn write_data_property<W: Write>(
    out: &mut RdfWriter<W>,
    doc: &OwlDocument,
    prop: &OwlDataProperty,
) -> Result<()> {
    out.about("owl:DatatypeProperty", &doc.iri(&prop.name))?;
    if prop.functional {
        out.resource("rdf:type", &format!("{OWL_NS}FunctionalProperty"))?;
    }
    out.escaped_text("rdfs:label", &prop.label)?;
    if let Some(comment) = &prop.comment {
        out.escaped_text("rdfs:comment", comment)?;
    }
    out.resource("rdfs:domain", &doc.iri(&prop.domain))?;
    out.resource("rdfs:range", &prop.range.iri())?;
    out.end("owl:DatatypeProperty")
}

fn write_object_property<W: Write>(
    out: &mut RdfWriter<W>,
    doc: &OwlDocument,
    prop: &OwlObjectProperty,
) -> Result<()> {
    out.about("owl:ObjectProperty", &doc.iri(&prop.name))?;
    if prop.functional {
        out.resource("rdf:type", &format!("{OWL_NS}FunctionalProperty"))?;
    }
    out.escaped_text("rdfs:label", &prop.label)?;
    if let Some(comment) = &prop.comment {
        out.escaped_text("rdfs:comment", comment)?;
    }
    out.resource("rdfs:domain", &doc.iri(&prop.domain))?;
    out.resource("rdfs:range", &doc.iri(&prop.range))?;
    out.end("owl:ObjectProperty")
}

/// Writes `doc` as indented RDF/XML to `inner`.
pub fn write_rdf_xml<W: Write>(doc: &OwlDocument, inner: W) -> Result<W> {
    let mut out = RdfWriter {
        xml: Writer::new_with_indent(inner, b' ', 2),
    };
    out.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let default_ns = format!("{}#", doc.base_iri);
    let mut root = BytesStart::new("rdf:RDF");
    root.push_attribute(("xmlns", default_ns.as_str()));
    root.push_attribute(("xml:base", doc.base_iri.as_str()));
    root.push_attribute(("xmlns:rdf", RDF_NS));
    root.push_attribute(("xmlns:rdfs", RDFS_NS));
    root.push_attribute(("xmlns:owl", OWL_NS));
    root.push_attribute(("xmlns:xsd", XSD_NS));
    out.start(root)?;

    out.about("owl:Ontology", &doc.base_iri)?;
    out.escaped_text("rdfs:label", &doc.label)?;
    if !doc.version_info.is_empty() {
        out.plain_text("owl:versionInfo", &doc.version_info)?;
    }
    out.end("owl:Ontology")?;

    for class in &doc.classes {
        write_class(&mut out, doc, class)?;
    }
    for prop in &doc.data_properties {
        write_data_property(&mut out, doc, prop)?;
    }
    for prop in &doc.object_properties {
        write_object_property(&mut out, doc, prop)?;
    }
    for individual in &doc.individuals {
        out.about("owl:NamedIndividual", &doc.iri(&individual.name))?;
        out.resource("rdf:type", &doc.iri(&individual.class))?;
        out.escaped_text("rdfs:label", &individual.label)?;
        out.end("owl:NamedIndividual")?;
    }

    out.end("rdf:RDF")?;
    Ok(out.xml.into_inner())
}

/// Renders `doc` to a string.
pub fn render_rdf_xml(doc: &OwlDocument) -> Result<String> {
    let bytes = write_rdf_xml(doc, Vec::new())?;
    String::from_utf8(bytes).map_err(EmitError::xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{OwlIndividual, XsdDatatype};

    fn document() -> OwlDocument {
        OwlDocument {
            base_iri: "http://example.org/onto".to_string(),
            label: "test".to_string(),
            version_info: "abc123".to_string(),
            root_class: "Root".to_string(),
            classes: vec![
                OwlClass {
                    name: "Root".to_string(),
                    label: "Root".to_string(),
                    comment: None,
                    parent: None,
                    required_properties: Vec::new(),
                },
                OwlClass {
                    name: "TaxonomicRank".to_string(),
                    label: "Taxonomic Rank".to_string(),
                    comment: Some("Kingdom &amp; below".to_string()),
                    parent: Some("Root".to_string()),
                    required_properties: vec!["taxonId".to_string()],
                },
            ],
            data_properties: vec![OwlDataProperty {
                name: "taxonId".to_string(),
                label: "taxon_id".to_string(),
                domain: "TaxonomicRank".to_string(),
                range: XsdDatatype::String,
                functional: true,
                comment: None,
            }],
            individuals: vec![OwlIndividual {
                name: "Oak_And_Pine".to_string(),
                class: "TaxonomicRank".to_string(),
                label: "Oak &amp; Pine &lt;mixed&gt;".to_string(),
            }],
            ..OwlDocument::default()
        }
    }

    #[test]
    fn writes_namespaces_and_header() {
        let xml = render_rdf_xml(&document()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns:owl=\"http://www.w3.org/2002/07/owl#\""));
        assert!(xml.contains("<owl:Ontology rdf:about=\"http://example.org/onto\">"));
        assert!(xml.contains("<owl:versionInfo>abc123</owl:versionInfo>"));
    }

    #[test]
    fn escaped_labels_are_not_escaped_twice() {
        let xml = render_rdf_xml(&document()).unwrap();
        assert!(xml.contains("<rdfs:label>Oak &amp; Pine &lt;mixed&gt;</rdfs:label>"));
        assert!(xml.contains("<rdfs:comment>Kingdom &amp; below</rdfs:comment>"));
        assert!(!xml.contains("&amp;amp;"));
    }

    #[test]
    fn classes_chain_to_root_with_restrictions() {
        let xml = render_rdf_xml(&document()).unwrap();
        assert!(xml.contains("<owl:Class rdf:about=\"http://example.org/onto#TaxonomicRank\">"));
        assert!(xml.contains("<rdfs:subClassOf rdf:resource=\"http://example.org/onto#Root\"/>"));
        assert!(xml.contains("<owl:onProperty rdf:resource=\"http://example.org/onto#taxonId\"/>"));
        assert!(xml.contains(">1</owl:minCardinality>"));
        assert!(xml.contains(
            "<rdf:type rdf:resource=\"http://www.w3.org/2002/07/owl#FunctionalProperty\"/>"
        ));
        assert!(xml.contains(
            "<rdfs:range rdf:resource=\"http://www.w3.org/2001/XMLSchema#string\"/>"
        ));
    }
}
