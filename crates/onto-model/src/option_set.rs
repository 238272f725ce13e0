use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered, de-duplicated member values of one option-set column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    values: Vec<String>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` unless an identical string is already present.
    /// Returns whether the value was added.
    pub fn push(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.values.iter().any(|existing| existing == &value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<String> for OptionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = OptionSet::new();
        for value in iter {
            set.push(value);
        }
        set
    }
}

/// Option-set name to members. Keyed by the raw column header.
pub type OptionSetMap = BTreeMap<String, OptionSet>;
