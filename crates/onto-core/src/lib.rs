#![deny(unsafe_code)]

pub mod assembler;
pub mod digest;
pub mod individuals;
pub mod pipeline;
pub mod summary;

pub use assembler::{
    AssembledOntology, BASELINE_OBJECT_PROPERTY_COUNT, OntologyClassBucket, assemble,
    baseline_object_properties, infer_hierarchy,
};
pub use digest::input_digest;
pub use individuals::generate_individuals;
pub use pipeline::{CompiledModel, compile, compile_with};
pub use summary::{MAX_HIERARCHY_LINKS, RunSummary, completeness_score};
