use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic category every classified field belongs to.
///
/// The set is closed: classification always resolves to one of these eight
/// buckets, so an ontology compiled from any sheet shares the same top level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OntologyClass {
    /// Identity and naming: taxon id, scientific name, family, genus, order.
    TaxonomicRank,
    /// Native, introduced and invasive ranges, countries and bioregions.
    GeographicDistribution,
    /// Biomes, habitats, elevation bands and ecological function.
    EcologicalInformation,
    /// Conservation status, threats and climate vulnerability.
    ConservationInformation,
    /// Height, diameter, growth form and leaf type.
    MorphologicalCharacteristics,
    /// Timber, non-timber products and agroforestry value.
    EconomicValue,
    /// Cultural significance and traditional uses.
    CulturalSignificance,
    /// Stewardship, planting and maintenance practice.
    ManagementInformation,
}

impl OntologyClass {
    pub const ALL: [OntologyClass; 8] = [
        OntologyClass::TaxonomicRank,
        OntologyClass::GeographicDistribution,
        OntologyClass::EcologicalInformation,
        OntologyClass::ConservationInformation,
        OntologyClass::MorphologicalCharacteristics,
        OntologyClass::EconomicValue,
        OntologyClass::CulturalSignificance,
        OntologyClass::ManagementInformation,
    ];

    /// Local name used for the OWL class.
    pub fn as_str(&self) -> &'static str {
        match self {
            OntologyClass::TaxonomicRank => "TaxonomicRank",
            OntologyClass::GeographicDistribution => "GeographicDistribution",
            OntologyClass::EcologicalInformation => "EcologicalInformation",
            OntologyClass::ConservationInformation => "ConservationInformation",
            OntologyClass::MorphologicalCharacteristics => "MorphologicalCharacteristics",
            OntologyClass::EconomicValue => "EconomicValue",
            OntologyClass::CulturalSignificance => "CulturalSignificance",
            OntologyClass::ManagementInformation => "ManagementInformation",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OntologyClass::TaxonomicRank => "Taxonomic Rank",
            OntologyClass::GeographicDistribution => "Geographic Distribution",
            OntologyClass::EcologicalInformation => "Ecological Information",
            OntologyClass::ConservationInformation => "Conservation Information",
            OntologyClass::MorphologicalCharacteristics => "Morphological Characteristics",
            OntologyClass::EconomicValue => "Economic Value",
            OntologyClass::CulturalSignificance => "Cultural Significance",
            OntologyClass::ManagementInformation => "Management Information",
        }
    }

    /// Fixed description written as the class comment.
    pub fn description(&self) -> &'static str {
        match self {
            OntologyClass::TaxonomicRank => {
                "Taxonomic classification and identity of a species, from kingdom down to species"
            }
            OntologyClass::GeographicDistribution => {
                "Native, introduced and invasive ranges of a species across countries and bioregions"
            }
            OntologyClass::EcologicalInformation => {
                "Biomes, habitats, elevation ranges and ecological functions a species is found in"
            }
            OntologyClass::ConservationInformation => {
                "Conservation status, known threats and climate vulnerability of a species"
            }
            OntologyClass::MorphologicalCharacteristics => {
                "Physical traits of a species such as height, diameter, growth form and leaf type"
            }
            OntologyClass::EconomicValue => {
                "Timber, non-timber and agroforestry value of a species"
            }
            OntologyClass::CulturalSignificance => {
                "Cultural significance and traditional uses of a species"
            }
            OntologyClass::ManagementInformation => {
                "Stewardship, planting and maintenance guidance for a species"
            }
        }
    }
}

impl fmt::Display for OntologyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OntologyClass {
    type Err = String;

    /// Accepts the local name or the label in any case, with spaces,
    /// underscores or hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        OntologyClass::ALL
            .into_iter()
            .find(|class| class.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown ontology class: {s}"))
    }
}

/// Class of the named individuals generated from enumerated values, and the
/// range of object properties pointing at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IndividualClass {
    Country,
    Biome,
    Habitat,
    ConservationStatus,
    Threat,
    GrowthForm,
    EconomicValue,
    EnumeratedValue,
}

impl IndividualClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndividualClass::Country => "Country",
            IndividualClass::Biome => "Biome",
            IndividualClass::Habitat => "Habitat",
            IndividualClass::ConservationStatus => "ConservationStatus",
            IndividualClass::Threat => "Threat",
            IndividualClass::GrowthForm => "GrowthForm",
            IndividualClass::EconomicValue => "EconomicValue",
            IndividualClass::EnumeratedValue => "EnumeratedValue",
        }
    }
}

impl fmt::Display for IndividualClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to any class an object property may range over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassRef {
    Semantic(OntologyClass),
    Value(IndividualClass),
}

impl ClassRef {
    /// OWL local name. `Semantic(EconomicValue)` and `Value(EconomicValue)`
    /// name the same class.
    pub fn name(&self) -> &'static str {
        match self {
            ClassRef::Semantic(class) => class.as_str(),
            ClassRef::Value(class) => class.as_str(),
        }
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<OntologyClass> for ClassRef {
    fn from(value: OntologyClass) -> Self {
        ClassRef::Semantic(value)
    }
}

impl From<IndividualClass> for ClassRef {
    fn from(value: IndividualClass) -> Self {
        ClassRef::Value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_and_local_names() {
        assert_eq!(
            "Taxonomic Rank".parse::<OntologyClass>(),
            Ok(OntologyClass::TaxonomicRank)
        );
        assert_eq!(
            "conservation_information".parse::<OntologyClass>(),
            Ok(OntologyClass::ConservationInformation)
        );
        assert!("unclassified".parse::<OntologyClass>().is_err());
    }

    #[test]
    fn economic_value_names_coincide() {
        assert_eq!(
            ClassRef::from(OntologyClass::EconomicValue).name(),
            ClassRef::from(IndividualClass::EconomicValue).name()
        );
    }

    #[test]
    fn every_class_has_a_description() {
        for class in OntologyClass::ALL {
            assert!(!class.description().is_empty());
            assert!(!class.label().is_empty());
        }
    }
}
