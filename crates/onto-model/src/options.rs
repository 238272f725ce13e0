//! Configuration options for a compilation run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// What to do when the reasoner reports inconsistencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyPolicy {
    /// Log the reports and still write the artifact.
    #[default]
    FailOpen,
    /// Abort before writing the artifact.
    FailClosed,
}

/// Suffix appended when two sources sanitize to the same identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionSuffix {
    /// `_2`, `_3`, ... in registration order.
    #[default]
    Numeric,
    /// First eight hex digits of the SHA-256 of the original text.
    Hash,
}

/// Options controlling a compilation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Artifact stem; the output file is `<ontology_name>.owl`.
    pub ontology_name: String,
    /// Namespace IRI; entity IRIs are `<base_iri>#<name>`.
    pub base_iri: String,
    /// Common superclass of every generated class.
    pub root_class: String,
    pub consistency_policy: ConsistencyPolicy,
    /// Cap on the consistency check. `None` waits indefinitely.
    pub reasoner_timeout_secs: Option<u64>,
    pub collision_suffix: CollisionSuffix,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            ontology_name: "biodiversity".to_string(),
            base_iri: "http://example.org/ontology/biodiversity".to_string(),
            root_class: "BiodiversityEntity".to_string(),
            consistency_policy: ConsistencyPolicy::FailOpen,
            reasoner_timeout_secs: Some(30),
            collision_suffix: CollisionSuffix::Numeric,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ontology_name(mut self, name: impl Into<String>) -> Self {
        self.ontology_name = name.into();
        self
    }

    #[must_use]
    pub fn with_base_iri(mut self, iri: impl Into<String>) -> Self {
        self.base_iri = iri.into();
        self
    }

    #[must_use]
    pub fn with_consistency_policy(mut self, policy: ConsistencyPolicy) -> Self {
        self.consistency_policy = policy;
        self
    }

    #[must_use]
    pub fn with_reasoner_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.reasoner_timeout_secs = timeout.map(|value| value.as_secs());
        self
    }

    #[must_use]
    pub fn with_collision_suffix(mut self, suffix: CollisionSuffix) -> Self {
        self.collision_suffix = suffix;
        self
    }

    pub fn reasoner_timeout(&self) -> Option<Duration> {
        self.reasoner_timeout_secs.map(Duration::from_secs)
    }

    /// File name of the artifact.
    pub fn artifact_file_name(&self) -> String {
        format!("{}.owl", self.ontology_name.trim())
    }

    pub fn validate(&self) -> Result<()> {
        let name = self.ontology_name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyOntologyName);
        }
        if name.contains(['/', '\\']) || name.contains("..") {
            return Err(ModelError::OntologyNameNotAFileName(name.to_string()));
        }
        let iri = self.base_iri.as_str();
        let invalid = |reason| ModelError::InvalidBaseIri {
            iri: iri.to_string(),
            reason,
        };
        if !(iri.starts_with("http://") || iri.starts_with("https://") || iri.starts_with("urn:"))
        {
            return Err(invalid("expected an http, https or urn scheme"));
        }
        if iri.contains('#') {
            return Err(invalid("must not contain a fragment"));
        }
        if iri.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
            return Err(invalid("must not contain whitespace"));
        }
        let mut chars = self.root_class.chars();
        let valid_root = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic())
            && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if !valid_root {
            return Err(ModelError::InvalidRootClass(self.root_class.clone()));
        }
        Ok(())
    }
}
