use serde::{Deserialize, Serialize};
use std::fmt;

use crate::class::{IndividualClass, OntologyClass};

/// Value type inferred for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Identifier,
    String,
    Numeric,
    List,
    Enumeration,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Identifier => "identifier",
            DataType::String => "string",
            DataType::Numeric => "numeric",
            DataType::List => "list",
            DataType::Enumeration => "enumeration",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a field's values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    DirectInput,
    AiGenerated,
    ManualCalculation,
    Hybrid,
}

impl SourceType {
    /// Hybrid wins over either single source; no source means direct input.
    pub fn from_presence(ai_category: bool, manual_calc: bool) -> Self {
        match (ai_category, manual_calc) {
            (true, true) => SourceType::Hybrid,
            (true, false) => SourceType::AiGenerated,
            (false, true) => SourceType::ManualCalculation,
            (false, false) => SourceType::DirectInput,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::DirectInput => "direct_input",
            SourceType::AiGenerated => "ai_generated",
            SourceType::ManualCalculation => "manual_calculation",
            SourceType::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified field-definition row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Raw label from the `field` column.
    pub original_field: String,
    /// Canonical column key from the schema field column.
    pub schema_field: String,
    /// Generated camelCase property name.
    pub property_name: String,
    pub ontology_class: OntologyClass,
    pub data_type: DataType,
    pub required: bool,
    pub source_type: SourceType,
    /// Allowed values: the inline option set column when it lists several
    /// values, otherwise the matched option-sheet set.
    pub constraints: Option<Vec<String>>,
    pub creates_individuals: bool,
    /// Target class when the field is a relationship rather than a literal.
    pub range_class: Option<IndividualClass>,
    /// True for taxonomic-rank fields (kingdom through species).
    pub is_hierarchical: bool,
    /// Values merged in from the matching option-set column.
    pub option_set_values: Option<Vec<String>>,
}

impl FieldDefinition {
    /// True when the field is a relationship (object property).
    pub fn is_relationship(&self) -> bool {
        self.range_class.is_some()
    }
}
