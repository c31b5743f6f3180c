use std::time::Instant;

use canonical::{normalize, TokenSequence};
use lexical::lexical_similarity;
use rayon::prelude::*;
use semantic::{cosine, tfidf_vector, InverseDocumentFrequency, TermFrequency};
use tracing::{debug, info, warn, Level};

use crate::metrics::metrics_recorder;
use crate::types::{MatchConfig, MatchError, MatchResult, MatchStrategy, TextDocument};


/// Score `candidate` against `corpus` and return every document whose
/// similarity is strictly above `threshold`, best first.
///
/// Corpus entries sharing the candidate's identifier are skipped. Fails only
/// when `threshold` is not a finite number.
pub fn find_matches<C, D>(
    candidate: &C,
    corpus: &[D],
    strategy: MatchStrategy,
    threshold: f64,
) -> Result<Vec<MatchResult>, MatchError>
where
    C: TextDocument + ?Sized,
    D: TextDocument + Sync,
{
    let matcher = Matcher::new(MatchConfig::new(strategy, threshold))?;
    Ok(matcher.find_matches(candidate, corpus))
}

/// Configured matching pipeline. Holds only its validated config, so one
/// instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Validate `cfg` and build a matcher from it.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        if let Err(err) = cfg.validate() {
            warn!(error = %err, "match_config_rejected");
            return Err(err);
        }
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Run one matching query. Results are sorted by descending similarity;
    /// ties keep corpus order.
    pub fn find_matches<C, D>(&self, candidate: &C, corpus: &[D]) -> Vec<MatchResult>
    where
        C: TextDocument + ?Sized,
        D: TextDocument + Sync,
    {
        let start = Instant::now();
        let span = tracing::span!(
            Level::DEBUG,
            "match.find",
            strategy = %self.cfg.strategy,
            candidate = %candidate.doc_id(),
            corpus_size = corpus.len()
        );
        let _guard = span.enter();

        let others: Vec<&D> = corpus
            .iter()
            .filter(|doc| {
                let is_self = doc.doc_id() == candidate.doc_id();
                if is_self {
                    debug!(doc_id = %doc.doc_id(), "skipping self match");
                }
                !is_self
            })
            .collect();

        let scored = match self.cfg.strategy {
            MatchStrategy::Lexical => self.score_lexical(candidate.text(), &others),
            MatchStrategy::Semantic => self.score_semantic(candidate.text(), &others),
        };

        let threshold = self.cfg.threshold;
        let mut hits: Vec<MatchResult> = scored
            .into_iter()
            .filter(|hit| hit.similarity > threshold)
            .collect();

        // Stable: equal scores keep corpus order.
        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        if let Some(max) = self.cfg.max_results {
            hits.truncate(max);
        }

        let latency = start.elapsed();
        let elapsed_micros = latency.as_micros();
        info!(
            strategy = %self.cfg.strategy,
            corpus_size = others.len(),
            hit_count = hits.len(),
            elapsed_micros,
            "match_complete"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(self.cfg.strategy, latency, others.len(), hits.len());
        }

        hits
    }

    fn score_lexical<D>(&self, candidate: &str, docs: &[&D]) -> Vec<MatchResult>
    where
        D: TextDocument + Sync,
    {
        self.map_docs(docs, |doc| {
            let score = lexical_similarity(candidate, doc.text());
            MatchResult {
                doc_id: doc.doc_id().to_owned(),
                similarity: score.similarity,
                distance: Some(score.distance),
                strategy: MatchStrategy::Lexical,
            }
        })
    }

    fn score_semantic<D>(&self, candidate: &str, docs: &[&D]) -> Vec<MatchResult>
    where
        D: TextDocument + Sync,
    {
        let candidate_tokens = normalize(candidate);
        let corpus_tokens: Vec<TokenSequence> = self.map_docs(docs, |doc| normalize(doc.text()));

        // IDF spans the candidate and every compared document, once per query.
        let idf = InverseDocumentFrequency::from_corpus(
            std::iter::once(&candidate_tokens).chain(corpus_tokens.iter()),
        );
        debug!(
            documents = idf.document_count(),
            vocabulary = idf.vocabulary_size(),
            "idf_built"
        );

        let candidate_vector =
            tfidf_vector(&TermFrequency::from_tokens(candidate_tokens.iter()), &idf);
        if candidate_vector.is_empty() {
            debug!("candidate has no weighted terms; every score is zero");
        }

        let pairs: Vec<(&D, &TokenSequence)> =
            docs.iter().copied().zip(corpus_tokens.iter()).collect();
        self.map_docs(&pairs, |(doc, tokens)| {
            let vector = tfidf_vector(&TermFrequency::from_tokens(tokens.iter()), &idf);
            MatchResult {
                doc_id: doc.doc_id().to_owned(),
                similarity: cosine(&candidate_vector, &vector),
                distance: None,
                strategy: MatchStrategy::Semantic,
            }
        })
    }

    /// Map `items` in order, on the rayon pool when `use_parallel` is set.
    fn map_docs<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.cfg.use_parallel {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}
