/// The closed stop-word list. Not configurable: changing it shifts every
/// semantic score.
pub const STOP_WORDS: [&str; 8] = ["the", "is", "and", "of", "in", "to", "a", "for"];

#[inline]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Drops stop words, keeping the remaining tokens in order.
///
/// Tokens are expected to be lower-cased already; `"The"` is not a stop word.
pub fn remove_stop_words<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| !is_stop_word(token))
        .map(str::to_owned)
        .collect()
}
