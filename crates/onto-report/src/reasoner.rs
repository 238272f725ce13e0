//! Consistency checking of an assembled document.
//!
//! A [`Reasoner`] is any checker that can look at an [`OwlDocument`] and
//! report problems. The deadline is cooperative: a reasoner should poll it
//! between units of work and return [`ReasonerOutcome::TimedOut`] once it
//! has passed.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::time::Instant;

use onto_normalization::is_valid_identifier;

use crate::document::OwlDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InconsistencyKind {
    UndeclaredClass,
    DuplicateIri,
    SubclassCycle,
    InvalidIdentifier,
}

impl InconsistencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InconsistencyKind::UndeclaredClass => "undeclared_class",
            InconsistencyKind::DuplicateIri => "duplicate_iri",
            InconsistencyKind::SubclassCycle => "subclass_cycle",
            InconsistencyKind::InvalidIdentifier => "invalid_identifier",
        }
    }
}

impl fmt::Display for InconsistencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One problem found by a reasoner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InconsistencyReport {
    pub kind: InconsistencyKind,
    /// Local name of the offending entity.
    pub subject: String,
    pub message: String,
}

impl InconsistencyReport {
    pub fn new(kind: InconsistencyKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for InconsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonerOutcome {
    Consistent,
    Inconsistent(Vec<InconsistencyReport>),
    TimedOut,
}

pub trait Reasoner {
    fn name(&self) -> &str;

    fn check(&self, document: &OwlDocument, deadline: Option<Instant>) -> ReasonerOutcome;
}

/// Structural checks that need no description-logic inference.
///
/// Reports references to undeclared classes, IRIs declared twice, cyclic
/// subclass chains and names outside the identifier grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralReasoner;

impl StructuralReasoner {
    pub fn new() -> Self {
        Self
    }
}

fn expired(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

fn check_declarations(document: &OwlDocument, reports: &mut Vec<InconsistencyReport>) {
    let mut kinds: BTreeMap<&str, &'static str> = BTreeMap::new();
    let declared = document
        .classes
        .iter()
        .map(|class| (class.name.as_str(), "class"))
        .chain(document.data_properties.iter().map(|prop| (prop.name.as_str(), "data property")))
        .chain(
            document
                .object_properties
                .iter()
                .map(|prop| (prop.name.as_str(), "object property")),
        )
        .chain(document.individuals.iter().map(|individual| (individual.name.as_str(), "individual")));
    for (name, kind) in declared {
        if !is_valid_identifier(name) {
            reports.push(InconsistencyReport::new(
                InconsistencyKind::InvalidIdentifier,
                name,
                format!("{kind} name is not a valid identifier"),
            ));
        }
        if let Some(previous) = kinds.insert(name, kind) {
            reports.push(InconsistencyReport::new(
                InconsistencyKind::DuplicateIri,
                name,
                format!("declared as {previous} and as {kind}"),
            ));
        }
    }
}

fn check_references(document: &OwlDocument, reports: &mut Vec<InconsistencyReport>) {
    let classes: BTreeSet<&str> = document.classes.iter().map(|class| class.name.as_str()).collect();
    let mut require = |class: &str, subject: &str, role: &str| {
        if !classes.contains(class) {
            reports.push(InconsistencyReport::new(
                InconsistencyKind::UndeclaredClass,
                subject,
                format!("{role} refers to undeclared class {class}"),
            ));
        }
    };
    for class in &document.classes {
        if let Some(parent) = &class.parent {
            require(parent, &class.name, "subClassOf");
        }
    }
    for prop in &document.data_properties {
        require(&prop.domain, &prop.name, "domain");
    }
    for prop in &document.object_properties {
        require(&prop.domain, &prop.name, "domain");
        require(&prop.range, &prop.name, "range");
    }
    for individual in &document.individuals {
        require(&individual.class, &individual.name, "rdf:type");
    }
}

fn check_cycles(document: &OwlDocument, reports: &mut Vec<InconsistencyReport>) {
    let parents: BTreeMap<&str, &str> = document
        .classes
        .iter()
        .filter_map(|class| Some((class.name.as_str(), class.parent.as_deref()?)))
        .collect();
    let mut reported = BTreeSet::new();
    for start in parents.keys() {
        let mut visited = BTreeSet::from([*start]);
        let mut current = *start;
        while let Some(parent) = parents.get(current) {
            if !visited.insert(*parent) {
                if *parent == *start && reported.insert(*start) {
                    reports.push(InconsistencyReport::new(
                        InconsistencyKind::SubclassCycle,
                        *start,
                        "class is its own ancestor",
                    ));
                }
                break;
            }
            current = *parent;
        }
    }
}

impl Reasoner for StructuralReasoner {
    fn name(&self) -> &str {
        "structural"
    }

    fn check(&self, document: &OwlDocument, deadline: Option<Instant>) -> ReasonerOutcome {
        let passes: [fn(&OwlDocument, &mut Vec<InconsistencyReport>); 3] =
            [check_declarations, check_references, check_cycles];
        let mut reports = Vec::new();
        for pass in passes {
            if expired(deadline) {
                return ReasonerOutcome::TimedOut;
            }
            pass(document, &mut reports);
        }
        if reports.is_empty() {
            ReasonerOutcome::Consistent
        } else {
            ReasonerOutcome::Inconsistent(reports)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{OwlClass, OwlIndividual, OwlObjectProperty};

    fn class(name: &str, parent: Option<&str>) -> OwlClass {
        OwlClass {
            name: name.to_string(),
            label: name.to_string(),
            comment: None,
            parent: parent.map(str::to_string),
            required_properties: Vec::new(),
        }
    }

    fn document() -> OwlDocument {
        OwlDocument {
            base_iri: "http://example.org/test".to_string(),
            root_class: "Root".to_string(),
            classes: vec![class("Root", None), class("Country", Some("Root"))],
            individuals: vec![OwlIndividual {
                name: "France".to_string(),
                class: "Country".to_string(),
                label: "France".to_string(),
            }],
            ..OwlDocument::default()
        }
    }

    fn kinds(outcome: ReasonerOutcome) -> Vec<InconsistencyKind> {
        match outcome {
            ReasonerOutcome::Inconsistent(reports) => reports.into_iter().map(|r| r.kind).collect(),
            other => panic!("expected inconsistencies, got {other:?}"),
        }
    }

    #[test]
    fn well_formed_document_is_consistent() {
        assert_eq!(
            StructuralReasoner.check(&document(), None),
            ReasonerOutcome::Consistent
        );
    }

    #[test]
    fn undeclared_range_is_reported() {
        let mut doc = document();
        doc.object_properties.push(OwlObjectProperty {
            name: "foundInBiome".to_string(),
            label: "foundInBiome".to_string(),
            domain: "Country".to_string(),
            range: "Biome".to_string(),
            functional: false,
            comment: None,
        });
        assert_eq!(
            kinds(StructuralReasoner.check(&doc, None)),
            [InconsistencyKind::UndeclaredClass]
        );
    }

    #[test]
    fn duplicate_and_invalid_names_are_reported() {
        let mut doc = document();
        doc.individuals.push(OwlIndividual {
            name: "Country".to_string(),
            class: "Country".to_string(),
            label: "Country".to_string(),
        });
        doc.individuals.push(OwlIndividual {
            name: "9lives".to_string(),
            class: "Country".to_string(),
            label: "9lives".to_string(),
        });
        assert_eq!(
            kinds(StructuralReasoner.check(&doc, None)),
            [InconsistencyKind::DuplicateIri, InconsistencyKind::InvalidIdentifier]
        );
    }

    #[test]
    fn subclass_cycle_is_reported_once_per_member() {
        let mut doc = document();
        doc.classes.push(class("A", Some("B")));
        doc.classes.push(class("B", Some("A")));
        let found = kinds(StructuralReasoner.check(&doc, None));
        assert_eq!(found, [InconsistencyKind::SubclassCycle; 2]);
    }

    #[test]
    fn passed_deadline_times_out() {
        let deadline = Instant::now();
        assert_eq!(
            StructuralReasoner.check(&document(), Some(deadline)),
            ReasonerOutcome::TimedOut
        );
    }
}
