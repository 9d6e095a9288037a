//! Regex predicates over the literal content of a quoted string token.
//!
//! No escape processing is performed: the content is the raw text between
//! one enclosing pair of matching quotes.

use regex::Regex;

/// Strip a single enclosing quote pair (`"..."` or `'...'`).
///
/// Source that is not wrapped in a matching pair is returned unchanged.
pub fn string_content(source: &str) -> &str {
    let mut chars = source.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && matches!(open, '"' | '\'') => {
            &source[open.len_utf8()..source.len() - close.len_utf8()]
        }
        _ => source,
    }
}

/// First overall match of `pattern` in the token's content.
pub fn match_group<'a>(source: &'a str, pattern: &Regex) -> Option<&'a str> {
    pattern.find(string_content(source)).map(|m| m.as_str())
}

pub fn is_match(source: &str, pattern: &Regex) -> bool {
    pattern.is_match(string_content(source))
}

/// Capture group `index` of the first match of `pattern` in the token's content.
pub fn capture_group<'a>(source: &'a str, pattern: &Regex, index: usize) -> Option<&'a str> {
    pattern
        .captures(string_content(source))
        .and_then(|caps| caps.get(index))
        .map(|m| m.as_str())
}
