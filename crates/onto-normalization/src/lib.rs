//! Text-to-identifier and text-to-label transforms.
//!
//! Every name and label that reaches the ontology passes through this crate:
//! [`sanitize_identifier`] for IRIs, [`sanitize_content`] for annotations,
//! and [`IdentifierRegistry`] to keep sanitized names unique within a run.

#![deny(unsafe_code)]

pub mod hash;
pub mod registry;
pub mod sanitize;

pub use hash::sha256_hex;
pub use registry::{Collision, IdentifierRegistry};
pub use sanitize::{
    EMPTY_PLACEHOLDER, MAX_IDENTIFIER_LEN, UNKNOWN_PLACEHOLDER, camel_case, is_valid_identifier,
    sanitize_content, sanitize_identifier,
};
