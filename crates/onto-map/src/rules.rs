//! Keyword rule tables driving field classification.
//!
//! Rules are data: an ordered list of named patterns evaluated first-match-wins
//! over normalized text (lowercase, words separated by single spaces).
//! Extending classification means adding a rule, not touching the dispatch.

use std::sync::LazyLock;

use regex::Regex;

use onto_model::{
    DataType, FieldDefinition, IndividualClass, OntologyClass, PrimitiveRange, TaxonomicLevel,
};

use crate::utils::normalize_text;

/// Default classification table, in evaluation order.
const DEFAULT_CLASS_RULES: &[(&str, &str, OntologyClass)] = &[
    (
        "taxonomic",
        r"\b(taxon\w*|taxonomic|scientific name|species|family|genus|genera|order|class|kingdom|phylum)\b",
        OntologyClass::TaxonomicRank,
    ),
    (
        "geographic",
        r"\b(native|introduced|invasive|distribution|bioregions?|countr(y|ies)|continents?|regions?|geograph\w*|endemic\w*)\b",
        OntologyClass::GeographicDistribution,
    ),
    (
        "ecological",
        r"\b(biomes?|habitats?|elevation|altitude|ecolog\w*|ecosystems?|functions?|functional|soils?)\b",
        OntologyClass::EcologicalInformation,
    ),
    (
        "conservation",
        r"\b(conservation|iucn|red list|status|threats?|threatened|endangered|climate vulnerab\w*|vulnerab\w*)\b",
        OntologyClass::ConservationInformation,
    ),
    (
        "morphological",
        r"\b(height|diameter|dbh|growth form|growth habit|leaf type|leaf|leaves|morpholog\w*|crown|bark)\b",
        OntologyClass::MorphologicalCharacteristics,
    ),
    (
        "economic",
        r"\b(timber|non timber|ntfp|agroforestry|economic\w*|commercial|wood products?)\b",
        OntologyClass::EconomicValue,
    ),
    (
        "cultural",
        r"\b(cultural\w*|culture|traditional uses?|traditional|ethnobotan\w*|spiritual)\b",
        OntologyClass::CulturalSignificance,
    ),
    (
        "management",
        r"\b(stewardship|planting|maintenance|management|propagation|nursery|pruning)\b",
        OntologyClass::ManagementInformation,
    ),
];

/// Substring checks applied when no named rule matches.
const FALLBACK_SUBSTRINGS: &[(&[&str], OntologyClass)] = &[
    (
        &["taxon", "species", "family", "genus"],
        OntologyClass::TaxonomicRank,
    ),
    (&["countr"], OntologyClass::GeographicDistribution),
    (
        &["biome", "habitat", "ecolog"],
        OntologyClass::EcologicalInformation,
    ),
];

const ABSOLUTE_FALLBACK: OntologyClass = OntologyClass::TaxonomicRank;

static IDENTIFIER_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(id|ids|identifier\w*|code|codes|key|uuid|guid|accession\w*)\b")
});

static MEASUREMENT_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(height|diameter|dbh|size|length|width|depth|area|elevation|altitude|meters?|metres?|cm|mm|km|kg|weight|mass|temperature|rainfall|precipitation|count|number|quantity|min|max|minimum|maximum|average|mean|percent\w*|ratio|rate)\b",
    )
});

static INTEGER_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(count|number|quantity|years?)\b"));

static BOOLEAN_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(is|has|can)\b|\b(flag|boolean|yes no)\b"));

static ENTITY_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(countr(y|ies)|biomes?|habitats?|conservation status)\b"));

static COLLECTION_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(countries|biomes|habitats|threats|uses|regions|bioregions|list)\b")
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid built-in classification pattern")
}

/// One named classification rule.
#[derive(Debug, Clone)]
pub struct ClassRule {
    pub name: String,
    pub pattern: Regex,
    pub class: OntologyClass,
}

impl ClassRule {
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        class: OntologyClass,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            class,
        })
    }
}

/// How a classification was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchedBy {
    Rule(String),
    Substring(&'static str),
    Fallback,
}

/// Ordered rule table; first match wins.
#[derive(Debug, Clone)]
pub struct ClassRuleSet {
    rules: Vec<ClassRule>,
}

impl Default for ClassRuleSet {
    fn default() -> Self {
        let rules = DEFAULT_CLASS_RULES
            .iter()
            .map(|(name, pattern, class)| ClassRule {
                name: (*name).to_string(),
                pattern: compile(pattern),
                class: *class,
            })
            .collect();
        Self { rules }
    }
}

impl ClassRuleSet {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: ClassRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Inserts a rule ahead of the existing ones.
    #[must_use]
    pub fn with_priority_rule(mut self, rule: ClassRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    pub fn rules(&self) -> &[ClassRule] {
        &self.rules
    }

    /// Resolves a class for `text`. Total: always returns one of the eight.
    pub fn classify(&self, text: &str) -> (OntologyClass, MatchedBy) {
        let normalized = normalize_text(text);
        if let Some(rule) = self.rules.iter().find(|rule| rule.pattern.is_match(&normalized)) {
            return (rule.class, MatchedBy::Rule(rule.name.clone()));
        }
        let lowered = text.to_lowercase();
        for (needles, class) in FALLBACK_SUBSTRINGS {
            if let Some(needle) = needles.iter().find(|needle| lowered.contains(**needle)) {
                return (*class, MatchedBy::Substring(*needle));
            }
        }
        (ABSOLUTE_FALLBACK, MatchedBy::Fallback)
    }
}

/// Infers the literal data type of a field from its combined text and the
/// number of inline option values.
pub fn infer_data_type(combined: &str, inline_option_count: usize) -> DataType {
    if inline_option_count > 1 {
        return DataType::Enumeration;
    }
    let normalized = normalize_text(combined);
    if IDENTIFIER_KEYWORDS.is_match(&normalized) {
        DataType::Identifier
    } else if MEASUREMENT_KEYWORDS.is_match(&normalized) {
        DataType::Numeric
    } else if normalized.contains("countries") {
        DataType::List
    } else {
        DataType::String
    }
}

/// Keyword-based class for values named by `text`, if any keyword family
/// applies. Used for both individual classes and relationship ranges.
pub fn infer_value_class(text: &str) -> Option<IndividualClass> {
    let lowered = text.to_lowercase();
    let has = |needle: &str| lowered.contains(needle);
    if has("countr") {
        Some(IndividualClass::Country)
    } else if has("biome") {
        Some(IndividualClass::Biome)
    } else if has("habitat") {
        Some(IndividualClass::Habitat)
    } else if has("conservation") || has("status") {
        Some(IndividualClass::ConservationStatus)
    } else if has("threat") {
        Some(IndividualClass::Threat)
    } else if has("growth") && has("form") {
        Some(IndividualClass::GrowthForm)
    } else if has("value") || has("timber") {
        Some(IndividualClass::EconomicValue)
    } else {
        None
    }
}

/// True when the field concerns an enumerable real-world entity.
pub fn names_enumerable_entity(text: &str) -> bool {
    ENTITY_KEYWORDS.is_match(&normalize_text(text))
}

/// Rank a schema field stands for: the highest rank keyword it contains.
pub fn taxonomic_level(schema_field: &str) -> Option<TaxonomicLevel> {
    TaxonomicLevel::mentioned_in(schema_field)
}

/// True for fields that hold several values per record.
pub fn is_multi_valued(field: &FieldDefinition) -> bool {
    if field.data_type == DataType::List {
        return true;
    }
    let text = format!("{} {}", field.original_field, field.schema_field);
    COLLECTION_KEYWORDS.is_match(&normalize_text(&text))
}

/// Literal range for a data property.
pub fn infer_primitive_range(field: &FieldDefinition) -> PrimitiveRange {
    let normalized = normalize_text(&format!("{} {}", field.schema_field, field.original_field));
    match field.data_type {
        DataType::Numeric if INTEGER_KEYWORDS.is_match(&normalized) => PrimitiveRange::Integer,
        DataType::Numeric => PrimitiveRange::Numeric,
        DataType::String if BOOLEAN_KEYWORDS.is_match(&normalize_text(&field.schema_field)) => {
            PrimitiveRange::Boolean
        }
        _ => PrimitiveRange::String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_rules_first_match_wins() {
        let rules = ClassRuleSet::default();
        assert_eq!(rules.classify("scientific_name").0, OntologyClass::TaxonomicRank);
        assert_eq!(
            rules.classify("countries_native").0,
            OntologyClass::GeographicDistribution
        );
        assert_eq!(
            rules.classify("conservation_status").0,
            OntologyClass::ConservationInformation
        );
        assert_eq!(
            rules.classify("max_height_meters").0,
            OntologyClass::MorphologicalCharacteristics
        );
        assert_eq!(
            rules.classify("traditional_uses").0,
            OntologyClass::CulturalSignificance
        );
        assert_eq!(
            rules.classify("planting_season").0,
            OntologyClass::ManagementInformation
        );
        assert_eq!(
            rules.classify("timber_quality").0,
            OntologyClass::EconomicValue
        );
    }

    #[test]
    fn substring_fallback_catches_compound_words() {
        let rules = ClassRuleSet::default();
        let (class, matched) = rules.classify("subfamilyname");
        assert_eq!(class, OntologyClass::TaxonomicRank);
        assert_eq!(matched, MatchedBy::Substring("family"));

        let (class, _) = rules.classify("microhabitats_observed");
        assert_eq!(class, OntologyClass::EcologicalInformation);
    }

    #[test]
    fn absolute_fallback_is_taxonomic() {
        let (class, matched) = ClassRuleSet::default().classify("zzz_notes");
        assert_eq!(class, OntologyClass::TaxonomicRank);
        assert_eq!(matched, MatchedBy::Fallback);
    }

    #[test]
    fn empty_rule_set_still_classifies() {
        let (class, _) = ClassRuleSet::empty().classify("countries_native");
        assert_eq!(class, OntologyClass::GeographicDistribution);
    }

    #[test]
    fn custom_priority_rule_overrides_defaults() {
        let rules = ClassRuleSet::default().with_priority_rule(
            ClassRule::new("pollination", r"\bpollinat\w*", OntologyClass::EcologicalInformation)
                .unwrap(),
        );
        assert_eq!(
            rules.classify("pollinator_species").0,
            OntologyClass::EcologicalInformation
        );
    }

    #[test]
    fn data_type_priority() {
        assert_eq!(infer_data_type("taxon_id", 0), DataType::Identifier);
        assert_eq!(infer_data_type("max_height_meters", 0), DataType::Numeric);
        assert_eq!(infer_data_type("countries_native", 0), DataType::List);
        assert_eq!(infer_data_type("scientific_name", 0), DataType::String);
        assert_eq!(infer_data_type("taxon_id", 3), DataType::Enumeration);
        assert_eq!(infer_data_type("family", 1), DataType::String);
    }

    #[test]
    fn value_classes_from_keywords() {
        assert_eq!(infer_value_class("countries_native"), Some(IndividualClass::Country));
        assert_eq!(infer_value_class("Biome"), Some(IndividualClass::Biome));
        assert_eq!(
            infer_value_class("conservation_status"),
            Some(IndividualClass::ConservationStatus)
        );
        assert_eq!(infer_value_class("growth_form"), Some(IndividualClass::GrowthForm));
        assert_eq!(infer_value_class("timber"), Some(IndividualClass::EconomicValue));
        assert_eq!(infer_value_class("leaf_type"), None);
    }

    #[test]
    fn rank_from_contained_keyword() {
        assert_eq!(taxonomic_level("family"), Some(TaxonomicLevel::Family));
        assert_eq!(taxonomic_level("Genus_Name"), Some(TaxonomicLevel::Genus));
        assert_eq!(taxonomic_level("familyName"), Some(TaxonomicLevel::Family));
        assert_eq!(taxonomic_level("subfamily"), Some(TaxonomicLevel::Family));
        assert_eq!(taxonomic_level("order_family"), Some(TaxonomicLevel::Order));
        assert_eq!(taxonomic_level("scientific_name"), None);
    }
}
