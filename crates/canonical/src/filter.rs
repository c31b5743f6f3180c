//! Character filtering.
//!
//! A *word character* is anything alphanumeric (Unicode aware) plus `_`,
//! matching the usual `\w` regex class. Whitespace is always preserved so
//! that word boundaries survive filtering.
//!
//! ```rust
//! use canonical::strip_non_word;
//!
//! assert_eq!(strip_non_word("hello, world!"), "hello world");
//! assert_eq!(strip_non_word("it's 100%"), "its 100");
//! ```

/// Returns true for characters that belong to a word: alphanumerics and `_`.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Deletes every character that is neither a word character nor whitespace.
///
/// Deleted characters are not replaced, so adjacent word fragments join up.
/// Whitespace runs are left as they are; callers split afterwards.
pub fn strip_non_word(text: &str) -> String {
    text.chars()
        .filter(|ch| is_word_char(*ch) || ch.is_whitespace())
        .collect()
}
