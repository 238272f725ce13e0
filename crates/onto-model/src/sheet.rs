//! Raw sheet rows as handed over by ingest.

use serde::{Deserialize, Serialize};

/// One raw row of the field-definition sheet. Absent cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    /// 1-based row number in the source sheet, header included.
    pub row: usize,
    pub field: String,
    pub schema_field: String,
    pub ai_category: String,
    pub manual_calc: String,
    pub option_set: String,
    pub exists: String,
}

impl FieldRow {
    pub fn new(row: usize, field: impl Into<String>, schema_field: impl Into<String>) -> Self {
        Self {
            row,
            field: field.into(),
            schema_field: schema_field.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ai_category(mut self, value: impl Into<String>) -> Self {
        self.ai_category = value.into();
        self
    }

    #[must_use]
    pub fn with_manual_calc(mut self, value: impl Into<String>) -> Self {
        self.manual_calc = value.into();
        self
    }

    #[must_use]
    pub fn with_option_set(mut self, value: impl Into<String>) -> Self {
        self.option_set = value.into();
        self
    }

    #[must_use]
    pub fn with_exists(mut self, value: impl Into<String>) -> Self {
        self.exists = value.into();
        self
    }
}

/// One column of the option-set sheet: header plus cells, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionColumn {
    pub name: String,
    pub cells: Vec<String>,
}

/// The option-set sheet as ragged columns in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSheet {
    pub columns: Vec<OptionColumn>,
}

impl OptionSheet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_column<I, S>(mut self, name: impl Into<String>, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.push(OptionColumn {
            name: name.into(),
            cells: cells.into_iter().map(Into::into).collect(),
        });
        self
    }
}

/// A field row dropped during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: String,
}
