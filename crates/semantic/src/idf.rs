use canonical::TokenSequence;
use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Inverse document frequency table for one corpus snapshot.
///
/// Weight is `ln(N / (1 + df))` where `N` is the number of documents and `df`
/// the number of documents containing the term. Terms present in more than
/// `N/e - 1` documents get a negative weight; that is kept as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InverseDocumentFrequency {
    weights: FxHashMap<String, f64>,
    document_frequency: FxHashMap<String, usize>,
    document_count: usize,
}

impl InverseDocumentFrequency {
    /// Build the table from every document of the current query.
    pub fn from_corpus<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenSequence>,
    {
        let mut document_frequency: FxHashMap<String, usize> = FxHashMap::default();
        let mut document_count = 0usize;

        for doc in documents {
            document_count += 1;
            let unique: FxHashSet<&str> = doc.iter().collect();
            for term in unique {
                match document_frequency.get_mut(term) {
                    Some(df) => *df += 1,
                    None => {
                        document_frequency.insert(term.to_owned(), 1);
                    }
                }
            }
        }

        let total = document_count as f64;
        let weights = document_frequency
            .iter()
            .map(|(term, &df)| {
                let weight = (total / (1.0 + df as f64)).ln();
                (term.clone(), weight)
            })
            .collect();

        Self {
            weights,
            document_frequency,
            document_count,
        }
    }

    /// IDF weight for `term`; terms never seen in the corpus weigh 0.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Number of corpus documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.weights.len()
    }
}
