//! Char-indexed string helpers.
//!
//! Token offsets count chars, so slicing by byte index is never correct
//! for the multi-byte scripts this crate handles. These helpers translate
//! char indices into byte ranges.

/// Number of chars in `s`.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the char at char index `idx`, or `s.len()` past the end.
fn byte_index(s: &str, idx: usize) -> usize {
    s.char_indices().nth(idx).map_or(s.len(), |(b, _)| b)
}

/// Slice `s` by char indices `start..end`, clamped to the string.
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_index(s, start);
    let to = byte_index(s, end);
    &s[from..to.max(from)]
}

/// Char index of the first occurrence of `needle` in `haystack`.
pub fn char_find(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}

/// ASCII digit or full-width digit (U+FF10..U+FF19).
#[inline]
pub fn is_any_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// ASCII letter/digit or any char of the full-width ASCII block (U+FF01..U+FF5E).
#[inline]
pub fn is_latin_or_fullwidth(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{FF01}'..='\u{FF5E}').contains(&c)
}

/// Whether `s` starts with a digit, ASCII or full-width.
#[inline]
pub fn is_numeral(s: &str) -> bool {
    s.chars().next().is_some_and(is_any_digit)
}

/// Whether `s` is non-empty and made only of ASCII digits.
#[inline]
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
