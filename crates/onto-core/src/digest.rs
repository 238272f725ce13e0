//! Input digest used as the artifact version.
//!
//! The digest is best-effort change detection: equal inputs give equal
//! digests, nothing more is promised.

use serde_json::json;

use onto_model::{FieldRow, OptionSheet};
use onto_normalization::sha256_hex;

/// SHA-256 over a canonical JSON encoding of both sheets.
///
/// Object keys are emitted in sorted order, so the encoding does not
/// depend on struct field order.
pub fn input_digest(rows: &[FieldRow], option_sheet: &OptionSheet) -> String {
    let canonical = json!({
        "fields": rows,
        "options": option_sheet,
    });
    sha256_hex(canonical.to_string().as_bytes())
}
