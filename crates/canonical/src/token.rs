use serde::{Deserialize, Serialize};

use crate::filter::{is_word_char, strip_non_word};

/// Ordered sequence of normalized tokens derived from one document.
///
/// Order does not matter to the frequency based scorers downstream but is kept
/// so that output is reproducible and easy to assert on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate the tokens in document order. Can be called any number of times.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_inner(self) -> Vec<String> {
        self.tokens
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Lower-cases `text`, deletes non-word punctuation and splits on whitespace.
///
/// Punctuation is removed rather than replaced, so `"don't"` yields the single
/// token `"dont"`. No stop-word removal or stemming happens here.
pub fn split_words(text: &str) -> Vec<String> {
    strip_non_word(&text.to_lowercase())
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Extracts lower-cased maximal runs of word characters.
///
/// Unlike [`split_words`], every non-word character acts as a delimiter, so
/// `"don't"` yields `"don"` and `"t"`. This is the raw word form used for
/// frequency overlap, with no stop-word removal or stemming.
pub fn word_frequency_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut words = Vec::with_capacity(lowered.len() / 5 + 1);
    let mut start: Option<usize> = None;

    for (idx, ch) in lowered.char_indices() {
        if is_word_char(ch) {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(word_start) = start.take() {
            words.push(lowered[word_start..idx].to_string());
        }
    }

    if let Some(word_start) = start {
        words.push(lowered[word_start..].to_string());
    }

    words
}
