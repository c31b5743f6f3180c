//! docmatch semantic similarity.
//!
//! Scores normalized token sequences with TF-IDF weights and cosine
//! similarity. Statistics are corpus-relative: the IDF table is rebuilt from
//! exactly the documents the caller passes, every time, and nothing is cached
//! between calls.
//!
//! - [`TermFrequency`]: raw term counts for one document.
//! - [`InverseDocumentFrequency`]: `ln(N / (1 + df))` per term for one corpus.
//! - [`WeightedVector`]: sparse `term -> tf × idf` map.
//! - [`cosine`]: sparse cosine similarity with a zero-norm guard.
//!
//! Weights can go negative when a term occurs in most of the corpus. That is
//! part of the weighting scheme; the scorer stays finite either way.
//!
//! ```
//! use semantic::semantic_similarity;
//!
//! let corpus = [
//!     "rust borrow checker",
//!     "python garbage collector",
//!     "rust ownership rules",
//!     "gardening tips for spring",
//! ];
//! let s = semantic_similarity(corpus[0], corpus[2], &corpus);
//! assert!(s > 0.0 && s < 1.0);
//! ```

mod idf;
mod tf;
mod vector;

use canonical::{normalize, TokenSequence};

pub use crate::idf::InverseDocumentFrequency;
pub use crate::tf::TermFrequency;
pub use crate::vector::{build_tfidf, cosine, tfidf_vector, WeightedVector};

/// Pairwise semantic similarity of two raw texts, with IDF drawn from
/// `corpus`.
///
/// Terms of `a` or `b` that never occur in `corpus` weigh 0. Include both texts
/// in `corpus` when their own vocabulary should count.
pub fn semantic_similarity<S: AsRef<str>>(a: &str, b: &str, corpus: &[S]) -> f64 {
    let corpus_tokens: Vec<TokenSequence> = corpus
        .iter()
        .map(|t| normalize(t.as_ref()))
        .collect();
    let idf = InverseDocumentFrequency::from_corpus(&corpus_tokens);

    let vec_a = tfidf_vector(&TermFrequency::from_tokens(normalize(a).iter()), &idf);
    let vec_b = tfidf_vector(&TermFrequency::from_tokens(normalize(b).iter()), &idf);
    cosine(&vec_a, &vec_b)
}
