//! Emission of a compiled model as an OWL artifact.
//!
//! The compiled IR is translated into an [`OwlDocument`] in one pass, every
//! name going through the identifier registry. The document is checked by a
//! [`Reasoner`], the consistency policy is applied, and the result is
//! serialized as RDF/XML.

#![deny(unsafe_code)]

pub mod document;
pub mod emit;
pub mod error;
pub mod reasoner;
pub mod rdf_xml;
pub mod translate;
pub mod writer;

pub use document::{
    OWL_NS, OwlClass, OwlDataProperty, OwlDocument, OwlIndividual, OwlObjectProperty, RDF_NS,
    RDFS_NS, XSD_NS, XsdDatatype,
};
pub use emit::{EmitReport, ReasonerVerdict, check_document, emit};
pub use error::{EmitError, Result};
pub use reasoner::{
    InconsistencyKind, InconsistencyReport, Reasoner, ReasonerOutcome, StructuralReasoner,
};
pub use rdf_xml::{render_rdf_xml, write_rdf_xml};
pub use translate::build_document;
pub use writer::write_artifact;
