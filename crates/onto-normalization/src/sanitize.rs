//! Identifier and label sanitization.

use unicode_normalization::UnicodeNormalization;

/// Longest identifier ever returned.
pub const MAX_IDENTIFIER_LEN: usize = 100;
/// Returned for blank input.
pub const EMPTY_PLACEHOLDER: &str = "EmptyValue";
/// Returned when nothing usable survives sanitization.
pub const UNKNOWN_PLACEHOLDER: &str = "UnknownValue";

const LEADING_PREFIX: &str = "Item_";

/// Symbols spelled out as words, padded with separators.
const SYMBOL_WORDS: &[(char, &str)] = &[
    ('&', "And"),
    ('+', "Plus"),
    ('@', "At"),
    ('%', "Percent"),
    ('#', "Number"),
    ('=', "Equals"),
    ('<', "LessThan"),
    ('>', "GreaterThan"),
    ('$', "Dollar"),
    ('°', "Degrees"),
    ('±', "PlusMinus"),
    ('×', "x"),
    ('€', "Euro"),
    ('£', "Pound"),
];

/// Letters without a canonical decomposition to ASCII.
const LETTER_FOLDS: &[(char, &str)] = &[
    ('ß', "ss"),
    ('æ', "ae"),
    ('Æ', "AE"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('ø', "o"),
    ('Ø', "O"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ł', "l"),
    ('Ł', "L"),
    ('þ', "th"),
    ('Þ', "Th"),
];

fn symbol_word(ch: char) -> Option<&'static str> {
    SYMBOL_WORDS
        .iter()
        .find(|(symbol, _)| *symbol == ch)
        .map(|(_, word)| *word)
}

fn letter_fold(ch: char) -> Option<&'static str> {
    LETTER_FOLDS
        .iter()
        .find(|(letter, _)| *letter == ch)
        .map(|(_, folded)| *folded)
}

/// Turns arbitrary text into an identifier matching `^[A-Za-z][A-Za-z0-9_]*$`
/// of at most [`MAX_IDENTIFIER_LEN`] characters.
///
/// Never fails. The transform is idempotent: sanitizing an already sanitized
/// identifier returns it unchanged.
pub fn sanitize_identifier(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut spelled = String::with_capacity(trimmed.len());
    for ch in trimmed.nfkd() {
        if ch.is_ascii_alphanumeric() {
            spelled.push(ch);
        } else if let Some(word) = symbol_word(ch) {
            spelled.push('_');
            spelled.push_str(word);
            spelled.push('_');
        } else if let Some(folded) = letter_fold(ch) {
            spelled.push_str(folded);
        } else if ch.is_ascii() || ch.is_whitespace() || is_dash(ch) {
            // Whitespace, path separators and remaining punctuation.
            spelled.push('_');
        }
        // Other non-ASCII (combining marks, scripts without a fold) is dropped.
    }

    let collapsed = collapse_separators(&spelled);
    if collapsed.is_empty() {
        return UNKNOWN_PLACEHOLDER.to_string();
    }

    let mut identifier = if collapsed.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
        collapsed
    } else {
        format!("{LEADING_PREFIX}{collapsed}")
    };
    truncate_identifier(&mut identifier, MAX_IDENTIFIER_LEN);
    identifier
}

fn is_dash(ch: char) -> bool {
    matches!(
        ch,
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{00B7}' | '\u{2022}'
    )
}

/// Collapses runs of `_` and strips them from both ends.
fn collapse_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending = false;
    for ch in raw.chars() {
        if ch == '_' {
            pending = !out.is_empty();
            continue;
        }
        if pending {
            out.push('_');
            pending = false;
        }
        out.push(ch);
    }
    out
}

/// Truncates an ASCII identifier to `max` characters without leaving a
/// trailing separator.
pub(crate) fn truncate_identifier(identifier: &mut String, max: usize) {
    if identifier.len() > max {
        identifier.truncate(max);
    }
    while identifier.ends_with('_') {
        identifier.pop();
    }
}

/// True when `value` already satisfies the identifier grammar and length.
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    value.len() <= MAX_IDENTIFIER_LEN
        && chars.next().is_some_and(|ch| ch.is_ascii_alphabetic())
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Escapes markup-significant characters and strips control characters other
/// than tab, newline and carriage return. The result is safe to embed as
/// already-escaped XML text.
pub fn sanitize_content(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            '\u{FFFE}' | '\u{FFFF}' => {}
            _ if ch.is_control() => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Converts an underscore-delimited identifier into camelCase.
/// The input is sanitized first, so the output is always a valid identifier.
pub fn camel_case(text: &str) -> String {
    let sanitized = sanitize_identifier(text);
    let mut out = String::with_capacity(sanitized.len());
    for (index, segment) in sanitized.split('_').filter(|s| !s.is_empty()).enumerate() {
        if index == 0 {
            out.push_str(&segment.to_ascii_lowercase());
            continue;
        }
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }
    out
}
