use serde::{Deserialize, Serialize};
use std::fmt;

/// Taxonomic ranks in parent-to-child order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomicLevel {
    Kingdom,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl TaxonomicLevel {
    pub const ORDERED: [TaxonomicLevel; 6] = [
        TaxonomicLevel::Kingdom,
        TaxonomicLevel::Class,
        TaxonomicLevel::Order,
        TaxonomicLevel::Family,
        TaxonomicLevel::Genus,
        TaxonomicLevel::Species,
    ];

    /// Keyword that marks a schema field as representing this rank.
    pub fn keyword(&self) -> &'static str {
        match self {
            TaxonomicLevel::Kingdom => "kingdom",
            TaxonomicLevel::Class => "class",
            TaxonomicLevel::Order => "order",
            TaxonomicLevel::Family => "family",
            TaxonomicLevel::Genus => "genus",
            TaxonomicLevel::Species => "species",
        }
    }

    /// Capitalised rank name used in derived property names.
    pub fn class_name(&self) -> &'static str {
        match self {
            TaxonomicLevel::Kingdom => "Kingdom",
            TaxonomicLevel::Class => "Class",
            TaxonomicLevel::Order => "Order",
            TaxonomicLevel::Family => "Family",
            TaxonomicLevel::Genus => "Genus",
            TaxonomicLevel::Species => "Species",
        }
    }

    /// Highest rank whose keyword occurs anywhere in `text`, ignoring case.
    pub fn mentioned_in(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        TaxonomicLevel::ORDERED
            .into_iter()
            .find(|level| lowered.contains(level.keyword()))
    }

    /// The rank directly below this one.
    pub fn child(&self) -> Option<Self> {
        let index = TaxonomicLevel::ORDERED.iter().position(|level| level == self)?;
        TaxonomicLevel::ORDERED.get(index + 1).copied()
    }
}

impl fmt::Display for TaxonomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Parent/child link between two adjacent taxonomic-rank fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicalRelationship {
    pub parent_field: String,
    pub child_field: String,
    pub parent_level: TaxonomicLevel,
    pub child_level: TaxonomicLevel,
    /// Derived property name, e.g. `hasParentGenus`.
    pub property: String,
}

impl HierarchicalRelationship {
    pub fn property_name_for(child: TaxonomicLevel) -> String {
        format!("hasParent{}", child.class_name())
    }
}
