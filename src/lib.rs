//! Workspace umbrella crate for docmatch.
//!
//! This crate stitches the normalizer, both scorers and the matching pipeline
//! together so callers can run a scan from a single API entry point, and loads
//! scan settings from YAML ([`DocmatchConfig`]).
//!
//! ```
//! use docmatch::{DocmatchConfig, Document, scan};
//!
//! let config = DocmatchConfig::from_yaml(
//!     "version: \"1\"\nmatcher:\n  strategy: Default Scan\n  threshold: 0.5\n",
//! )
//! .unwrap();
//!
//! let corpus = vec![
//!     Document::new("17", "the cat sat on the mat"),
//!     Document::new("18", "dogs chase cats"),
//! ];
//! let candidate = Document::new("19", "the cat sat on the mat");
//!
//! let hits = scan(&config, &candidate, &corpus).unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].doc_id, "17");
//! assert_eq!(hits[0].distance, Some(0));
//! ```

pub mod config;

pub use canonical::{STOP_WORDS, Stemmer, TokenSequence, normalize};
pub use lexical::{
    LexicalScore, WordFrequency, levenshtein_distance, lexical_similarity, word_overlap,
};
pub use matcher::{
    Document, MatchConfig, MatchError, MatchMetrics, MatchResult, MatchStrategy, Matcher,
    TextDocument, find_matches, set_match_metrics,
};
pub use semantic::{
    InverseDocumentFrequency, TermFrequency, WeightedVector, build_tfidf, cosine,
    semantic_similarity, tfidf_vector,
};

pub use crate::config::{ConfigLoadError, DocmatchConfig, MatchYamlConfig};

use tracing::Level;

/// Run one scan with the matcher settings from `config`.
///
/// Builds a fresh [`Matcher`] per call; callers scanning many candidates with
/// the same settings should build one via [`DocmatchConfig::to_match_config`]
/// and reuse it.
pub fn scan<C, D>(
    config: &DocmatchConfig,
    candidate: &C,
    corpus: &[D],
) -> Result<Vec<MatchResult>, MatchError>
where
    C: TextDocument + ?Sized,
    D: TextDocument + Sync,
{
    let span = tracing::span!(
        Level::INFO,
        "docmatch.scan",
        config = config.name.as_deref().unwrap_or("-")
    );
    let _guard = span.enter();

    let matcher = Matcher::new(config.to_match_config()?)?;
    Ok(matcher.find_matches(candidate, corpus))
}
