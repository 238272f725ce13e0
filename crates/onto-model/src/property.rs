use serde::{Deserialize, Serialize};
use std::fmt;

use crate::class::{ClassRef, OntologyClass};

/// Literal range of a data property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveRange {
    String,
    Numeric,
    Integer,
    Boolean,
}

impl PrimitiveRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveRange::String => "string",
            PrimitiveRange::Numeric => "numeric",
            PrimitiveRange::Integer => "integer",
            PrimitiveRange::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProperty {
    pub name: String,
    pub domain: OntologyClass,
    pub range: PrimitiveRange,
    pub functional: bool,
    pub required: bool,
    pub constraints: Option<Vec<String>>,
    /// Schema field the property was derived from.
    pub source_field: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub name: String,
    pub domain: OntologyClass,
    pub range: ClassRef,
    pub functional: bool,
    /// Schema field the property was derived from; `None` for baseline links.
    pub source_field: Option<String>,
}

impl ObjectProperty {
    pub fn is_baseline(&self) -> bool {
        self.source_field.is_none()
    }
}
