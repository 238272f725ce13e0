#![deny(unsafe_code)]

pub mod columns;
pub mod error;
pub mod rows;
pub mod sheet;

pub use columns::{FUZZY_HEADER_THRESHOLD, FieldSheetColumns};
pub use error::{IngestError, Result};
pub use rows::{read_field_rows, read_option_sheet};
pub use sheet::{Sheet, SheetRow, read_sheet};
