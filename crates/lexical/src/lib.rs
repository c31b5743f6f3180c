//! # docmatch lexical similarity
//!
//! Scores two raw texts against each other without any normalization beyond
//! lower-casing for word counts. Two signals come out of one call:
//!
//! 1.  **Edit distance**: Levenshtein distance over the raw strings, computed
//!     with a single rolling row so multi-thousand character documents stay
//!     within a few kilobytes of working memory.
//!
//! 2.  **Word overlap**: both texts are split into lower-cased `\w+` runs and
//!     counted. The similarity is the sum over shared words of the smaller
//!     count, divided by the larger of the two word totals. Stop words are
//!     kept and nothing is stemmed.
//!
//! ## Contract
//!
//! - Pure function of the two input strings. No I/O, no global state.
//! - `similarity` is always finite and within `[0.0, 1.0]`.
//! - When neither text has a single word the ratio is undefined. Identical
//!   texts (both empty, say) then score `1.0`; anything else scores `0.0`.
//!
//! ## Example Usage
//!
//! ```
//! use lexical::lexical_similarity;
//!
//! let score = lexical_similarity("hello world", "goodbye world");
//! assert_eq!(score.similarity, 0.5);
//! assert_eq!(score.distance, 7);
//! ```

mod levenshtein;
mod overlap;

use serde::{Deserialize, Serialize};

pub use crate::levenshtein::levenshtein_distance;
pub use crate::overlap::{word_overlap, WordFrequency};

/// Output of [`lexical_similarity`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LexicalScore {
    /// Word-overlap ratio in `[0.0, 1.0]`.
    pub similarity: f64,
    /// Levenshtein distance between the raw texts.
    pub distance: usize,
}

/// Compute word-overlap similarity and edit distance for two raw texts.
pub fn lexical_similarity(a: &str, b: &str) -> LexicalScore {
    let distance = levenshtein_distance(a, b);
    let freq_a = WordFrequency::from_text(a);
    let freq_b = WordFrequency::from_text(b);

    let similarity = match word_overlap(&freq_a, &freq_b) {
        Some(ratio) => ratio,
        None if distance == 0 => 1.0,
        None => 0.0,
    };

    LexicalScore {
        similarity,
        distance,
    }
}
