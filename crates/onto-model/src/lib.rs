#![deny(unsafe_code)]

pub mod class;
pub mod error;
pub mod field;
pub mod hierarchy;
pub mod individual;
pub mod options;
pub mod option_set;
pub mod property;
pub mod sheet;

pub use class::{ClassRef, IndividualClass, OntologyClass};
pub use error::{ModelError, Result};
pub use field::{DataType, FieldDefinition, SourceType};
pub use hierarchy::{HierarchicalRelationship, TaxonomicLevel};
pub use individual::{IndividualSource, NamedIndividual};
pub use option_set::{OptionSet, OptionSetMap};
pub use options::{CollisionSuffix, CompileOptions, ConsistencyPolicy};
pub use property::{DataProperty, ObjectProperty, PrimitiveRange};
pub use sheet::{FieldRow, OptionColumn, OptionSheet, SkippedRow};
