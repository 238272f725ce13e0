//! Text helpers shared by the classifier and the option-set processor.

/// Cell contents treated as missing.
const BLANK_SENTINELS: &[&str] = &["nan", "none"];

/// Flag values that read as "not set" in the ai/manual columns.
const NEGATIVE_FLAGS: &[&str] = &["no", "n", "false", "0", "-"];

/// Normalizes text for matching by lowercasing and replacing every
/// non-alphanumeric character with a single space.
pub fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(|ch: char| !ch.is_alphanumeric(), " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// True for empty cells and the `nan`/`none` placeholders that dataframe
/// exports write for missing values. Other markers such as `N/A` are data.
pub fn is_blank_cell(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || BLANK_SENTINELS
            .iter()
            .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// True when a flag-style column carries a meaningful value.
pub fn is_marked(raw: &str) -> bool {
    if is_blank_cell(raw) {
        return false;
    }
    let trimmed = raw.trim();
    !NEGATIVE_FLAGS
        .iter()
        .any(|flag| trimmed.eq_ignore_ascii_case(flag))
}

/// Splits an inline option-set cell on `,` `;` `|` and newlines, dropping
/// blanks and duplicate values while keeping first-seen order.
pub fn split_option_values(raw: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for part in raw.split([',', ';', '|', '\n']) {
        let value = part.trim();
        if is_blank_cell(value) || values.iter().any(|existing| existing == value) {
            continue;
        }
        values.push(value.to_string());
    }
    values
}
