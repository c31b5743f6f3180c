use crate::stem::Stemmer;
use crate::stopwords::is_stop_word;
use crate::token::{split_words, TokenSequence};

/// Main entry point. Turns raw text into its normalized token sequence using
/// the shared English stemmer.
///
/// Stages, in order: lower-casing, non-word character deletion, whitespace
/// splitting, stop-word removal, stemming.
pub fn normalize(text: &str) -> TokenSequence {
    normalize_with(text, Stemmer::english())
}

/// Same as [`normalize`] with a caller-supplied stemmer.
pub fn normalize_with(text: &str, stemmer: &Stemmer) -> TokenSequence {
    let tokens: Vec<String> = split_words(text)
        .into_iter()
        // Stop words are matched before stemming, against the lower-cased word.
        .filter(|word| !is_stop_word(word))
        .map(|word| stemmer.stem(&word))
        .collect();
    TokenSequence::new(tokens)
}
