use canonical::TokenSequence;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::idf::InverseDocumentFrequency;
use crate::tf::TermFrequency;

/// Sparse TF-IDF vector: only terms with a non-zero weight are stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeightedVector {
    weights: FxHashMap<String, f64>,
}

impl WeightedVector {
    /// Weight for `term`; 0.0 for anything not stored.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(term, &w)| (term.as_str(), w))
    }

    /// Number of stored (non-zero) entries.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True when every weight is zero, the degenerate vector.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product over the union of both vocabularies. Missing entries are 0,
    /// so only terms shared by both vectors contribute.
    pub fn dot(&self, other: &WeightedVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(term, w)| large.weights.get(term).map(|v| w * v))
            .fold(0.0, |acc, x| acc + x)
    }
}

impl FromIterator<(String, f64)> for WeightedVector {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        let weights = iter.into_iter().filter(|(_, w)| *w != 0.0).collect();
        Self { weights }
    }
}

/// Weight each term of `tf` by its IDF. Terms absent from the document never
/// appear in the result.
pub fn tfidf_vector(tf: &TermFrequency, idf: &InverseDocumentFrequency) -> WeightedVector {
    tf.iter()
        .map(|(term, count)| {
            let weight = f64::from(count) * idf.weight(term);
            (term.to_owned(), weight)
        })
        .collect()
}

/// Vectorize `document` against an IDF table built from `corpus`.
///
/// Builds the IDF table on every call; when scoring many documents against one
/// corpus build [`InverseDocumentFrequency`] once and use [`tfidf_vector`].
pub fn build_tfidf(document: &TokenSequence, corpus: &[TokenSequence]) -> WeightedVector {
    let idf = InverseDocumentFrequency::from_corpus(corpus);
    tfidf_vector(&TermFrequency::from_tokens(document.iter()), &idf)
}

/// Cosine similarity of two sparse vectors.
///
/// A zero-norm vector on either side makes the ratio undefined; that case
/// scores 0.0. The result is always finite and within `[-1.0, 1.0]`, and within
/// `[0.0, 1.0]` whenever both vectors are non-negative. A zero score is always
/// `+0.0`, so ties at zero order the same as any other equal score.
pub fn cosine(a: &WeightedVector, b: &WeightedVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let score = a.dot(b) / (norm_a * norm_b);
    if score == 0.0 || !score.is_finite() {
        return 0.0;
    }
    score.clamp(-1.0, 1.0)
}
