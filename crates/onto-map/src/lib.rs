#![deny(unsafe_code)]

pub mod classifier;
pub mod option_sets;
pub mod rules;
pub mod utils;

pub use classifier::{FieldClassifier, RowOutcome};
pub use option_sets::{build_option_sets, find_option_set};
pub use rules::{
    ClassRule, ClassRuleSet, MatchedBy, infer_data_type, infer_primitive_range, infer_value_class,
    is_multi_valued, names_enumerable_entity, taxonomic_level,
};
pub use utils::{is_blank_cell, is_marked, normalize_text, split_option_values};
