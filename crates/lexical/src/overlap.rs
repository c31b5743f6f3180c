use canonical::word_frequency_tokens;
use fxhash::FxHashMap;

/// Lower-cased raw word counts for one text. No stop words, no stemming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequency {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl WordFrequency {
    pub fn from_text(text: &str) -> Self {
        let words = word_frequency_tokens(text);
        let total = words.len();
        let mut counts = FxHashMap::default();
        for word in words {
            *counts.entry(word).or_insert(0) += 1;
        }
        Self { counts, total }
    }

    /// Count for `word`; 0 when absent.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total number of words, counting repeats.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum over shared words of the smaller of the two counts.
    pub fn shared_count(&self, other: &WordFrequency) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(word, &count)| count.min(large.count(word)))
            .sum()
    }
}

/// Word-overlap ratio: shared word count over the larger of the two totals.
///
/// Returns `None` when neither text contains a word, leaving the degenerate
/// policy to the caller.
pub fn word_overlap(a: &WordFrequency, b: &WordFrequency) -> Option<f64> {
    let denominator = a.total().max(b.total());
    if denominator == 0 {
        return None;
    }
    Some(a.shared_count(b) as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lowercased_words() {
        let freq = WordFrequency::from_text("The cat saw THE dog; the end.");
        assert_eq!(freq.count("the"), 3);
        assert_eq!(freq.count("cat"), 1);
        assert_eq!(freq.count("missing"), 0);
        assert_eq!(freq.total(), 7);
        assert_eq!(freq.distinct(), 5);
    }

    #[test]
    fn shared_count_takes_minimum() {
        let a = WordFrequency::from_text("a a a b");
        let b = WordFrequency::from_text("a b b c");
        assert_eq!(a.shared_count(&b), 2);
        assert_eq!(b.shared_count(&a), 2);
    }

    #[test]
    fn overlap_divides_by_larger_total() {
        let a = WordFrequency::from_text("hello world");
        let b = WordFrequency::from_text("goodbye cruel world");
        assert_eq!(word_overlap(&a, &b), Some(1.0 / 3.0));
    }

    #[test]
    fn overlap_undefined_without_words() {
        let a = WordFrequency::from_text("");
        let b = WordFrequency::from_text("...");
        assert_eq!(word_overlap(&a, &b), None);
    }

    #[test]
    fn overlap_zero_when_one_side_empty() {
        let a = WordFrequency::from_text("");
        let b = WordFrequency::from_text("some words");
        assert_eq!(word_overlap(&a, &b), Some(0.0));
    }
}
