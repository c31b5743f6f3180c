//! # docmatch matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the query-time layer of docmatch. Given one candidate
//! document and a corpus of previously stored documents, it scores every
//! corpus entry with the selected strategy, keeps the ones strictly above a
//! caller-chosen threshold and returns them best first.
//!
//! Two strategies are available and are never blended:
//! - `Lexical`: word-frequency overlap plus Levenshtein distance on the raw
//!   text ([`lexical`]).
//! - `Semantic`: normalized tokens ([`canonical`]), TF-IDF weights with the
//!   IDF table rebuilt from candidate + corpus on each query, cosine
//!   similarity ([`semantic`]).
//!
//! ## Core Types
//!
//! - [`TextDocument`]: anything with an identifier and a text. Implement it on
//!   your own record type to keep owner or upload metadata alongside.
//! - [`Document`]: plain owned implementation of [`TextDocument`].
//! - [`MatchStrategy`]: `Lexical` or `Semantic`.
//! - [`MatchConfig`]: strategy, threshold, optional `max_results`, and whether
//!   to score on the rayon pool.
//! - [`MatchResult`]: matched id, similarity, optional edit distance.
//! - [`Matcher`]: validated config plus the pipeline itself.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Document, MatchConfig, MatchStrategy, Matcher};
//!
//! let corpus = vec![
//!     Document::new("a", "the quick brown fox"),
//!     Document::new("b", "a slow green turtle"),
//! ];
//! let candidate = Document::new("new", "the quick brown dog");
//!
//! let matcher = Matcher::new(MatchConfig::new(MatchStrategy::Lexical, 0.5)).unwrap();
//! let hits = matcher.find_matches(&candidate, &corpus);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].doc_id, "a");
//! assert_eq!(hits[0].similarity, 0.75);
//! ```
//!
//! ## Observability
//!
//! Every query runs inside a `match.find` span and ends with a
//! `match_complete` event. Install a [`MatchMetrics`] implementation via
//! [`set_match_metrics`] to also receive latency, corpus size and hit count
//! per call.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{find_matches, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{
    Document, MatchConfig, MatchError, MatchResult, MatchStrategy, TextDocument,
};
