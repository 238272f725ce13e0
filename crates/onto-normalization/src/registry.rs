//! Per-run identifier registry.
//!
//! Sanitization is lossy, so distinct source strings can land on the same
//! identifier. The registry remembers which source claimed each name and
//! hands later claimants a suffixed variant.

use std::collections::HashMap;

use onto_model::CollisionSuffix;
use tracing::debug;

use crate::hash::sha256_hex;
use crate::sanitize::{MAX_IDENTIFIER_LEN, sanitize_identifier, truncate_identifier};

/// A name that had to be disambiguated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Identifier the source sanitized to.
    pub requested: String,
    /// Identifier actually assigned.
    pub assigned: String,
    pub source: String,
    /// Source that already owned `requested`.
    pub existing_source: String,
}

#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    suffix: CollisionSuffix,
    owners: HashMap<String, String>,
    assigned: HashMap<String, String>,
    collisions: Vec<Collision>,
}

impl IdentifierRegistry {
    pub fn new(suffix: CollisionSuffix) -> Self {
        Self {
            suffix,
            ..Self::default()
        }
    }

    /// Returns the unique identifier for `source`, sanitizing `candidate`.
    ///
    /// `source` is a stable key for the entity (for example
    /// `individual:Country:France`). Registering the same source twice returns
    /// the same identifier.
    pub fn register(&mut self, source: &str, candidate: &str) -> String {
        if let Some(existing) = self.assigned.get(source) {
            return existing.clone();
        }
        let requested = sanitize_identifier(candidate);
        let name = match self.owners.get(&requested) {
            None => requested.clone(),
            Some(owner) => {
                let assigned = self.disambiguate(&requested, source);
                debug!(
                    requested = %requested,
                    assigned = %assigned,
                    source,
                    existing_source = %owner,
                    "identifier collision"
                );
                self.collisions.push(Collision {
                    requested: requested.clone(),
                    assigned: assigned.clone(),
                    source: source.to_string(),
                    existing_source: owner.clone(),
                });
                assigned
            }
        };
        self.owners.insert(name.clone(), source.to_string());
        self.assigned.insert(source.to_string(), name.clone());
        name
    }

    /// Identifier previously assigned to `source`.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.assigned.get(source).map(String::as_str)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    fn disambiguate(&self, requested: &str, source: &str) -> String {
        if self.suffix == CollisionSuffix::Hash {
            let digest = sha256_hex(source.as_bytes());
            let candidate = with_suffix(requested, &format!("_{}", &digest[..8]));
            if !self.owners.contains_key(&candidate) {
                return candidate;
            }
        }
        (2usize..)
            .map(|n| with_suffix(requested, &format!("_{n}")))
            .find(|candidate| !self.owners.contains_key(candidate))
            .unwrap_or_else(|| requested.to_string())
    }
}

/// Appends `suffix`, shortening `base` so the result stays within the limit.
fn with_suffix(base: &str, suffix: &str) -> String {
    let mut stem = base.to_string();
    truncate_identifier(&mut stem, MAX_IDENTIFIER_LEN - suffix.len());
    stem.push_str(suffix);
    stem
}
