//! Shared utility functions.

/// Number of characters kept by [`preview`].
pub const PREVIEW_CHARS: usize = 100;

/// Truncate a string to at most `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte character is
/// never split. Returns a sub-slice of the original string.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// First [`PREVIEW_CHARS`] characters of `s`, always followed by `...`.
pub fn preview(s: &str) -> String {
    format!("{}...", truncate_chars(s, PREVIEW_CHARS))
}
