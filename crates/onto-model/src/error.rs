use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("ontology name must not be empty")]
    EmptyOntologyName,
    #[error("ontology name {0:?} must be a plain file name")]
    OntologyNameNotAFileName(String),
    #[error("invalid base IRI {iri}: {reason}")]
    InvalidBaseIri { iri: String, reason: &'static str },
    #[error("root class name {0:?} is not a valid identifier")]
    InvalidRootClass(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
