use serde::{Deserialize, Serialize};

use crate::class::IndividualClass;

/// Which input produced a named individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndividualSource {
    /// Option set merged into a classified field.
    OptionSet,
    /// Option-set column read directly, with or without a matching field.
    DirectOptionSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedIndividual {
    /// Sanitized identifier.
    pub name: String,
    pub class: IndividualClass,
    /// Markup-safe display label.
    pub label: String,
    pub original_value: String,
    pub source_field: String,
    pub source: IndividualSource,
}
