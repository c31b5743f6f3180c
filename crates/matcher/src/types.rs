use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Anything the engine can score: an identifier and its raw text.
///
/// Callers implement this on their own record types so owner names, upload
/// dates and the like stay on their side; results refer back by `doc_id`.
pub trait TextDocument {
    fn doc_id(&self) -> &str;
    fn text(&self) -> &str;
}

impl<T: TextDocument + ?Sized> TextDocument for &T {
    fn doc_id(&self) -> &str {
        (**self).doc_id()
    }

    fn text(&self) -> &str {
        (**self).text()
    }
}

/// Plain identifier + text document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Opaque caller-supplied identifier.
    pub id: String,
    /// Raw UTF-8 content; may be empty.
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Build a document from raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(id: impl Into<String>, bytes: Vec<u8>) -> Result<Self, MatchError> {
        let id = id.into();
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { id, text }),
            Err(err) => {
                tracing::warn!(doc_id = %id, error = %err, "document_rejected");
                Err(MatchError::InvalidInput(format!(
                    "document {id} is not valid UTF-8: {err}"
                )))
            }
        }
    }
}

impl TextDocument for Document {
    fn doc_id(&self) -> &str {
        &self.id
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Matching strategy. The two produce scores on different scales and are
/// never mixed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Raw word-frequency overlap plus Levenshtein distance.
    Lexical,
    /// Normalized tokens, TF-IDF weights, cosine similarity.
    Semantic,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::Lexical => "lexical",
            MatchStrategy::Semantic => "semantic",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchStrategy {
    type Err = MatchError;

    /// Accepts the strategy names and the scan labels used by the upload
    /// workflow ("Default Scan" is lexical, "Advanced Scan" is semantic).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexical" | "default scan" | "default" => Ok(MatchStrategy::Lexical),
            "semantic" | "advanced scan" | "advanced" => Ok(MatchStrategy::Semantic),
            _ => Err(MatchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Configuration for a [`Matcher`](crate::Matcher).
///
/// There is no `Default`: the threshold is policy and must be chosen by the
/// caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Configuration schema version.
    #[serde(default = "MatchConfig::default_version")]
    pub version: u32,
    /// Which scorer to run.
    pub strategy: MatchStrategy,
    /// A document matches when its similarity is strictly greater than this.
    pub threshold: f64,
    /// Keep at most this many results after sorting.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Score corpus documents on the rayon pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub fn new(strategy: MatchStrategy, threshold: f64) -> Self {
        Self {
            version: Self::default_version(),
            strategy,
            threshold,
            max_results: None,
            use_parallel: false,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig("version must be >= 1".into()));
        }
        if !self.threshold.is_finite() {
            return Err(MatchError::InvalidThreshold(self.threshold));
        }
        if self.max_results == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// One corpus document that scored above the threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Identifier of the matched corpus document.
    pub doc_id: String,
    /// Strategy-specific similarity; lexical lies in `[0, 1]`, semantic in
    /// `[-1, 1]`.
    pub similarity: f64,
    /// Levenshtein distance to the candidate, lexical strategy only.
    pub distance: Option<usize>,
    pub strategy: MatchStrategy,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Input text could not be accepted (not UTF-8).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Threshold is NaN or infinite.
    #[error("invalid threshold {0}; expected a finite number")]
    InvalidThreshold(f64),
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    #[error("unknown match strategy: {0:?}")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_is_valid() {
        let cfg = MatchConfig::new(MatchStrategy::Lexical, 0.5);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.max_results, None);
        assert!(!cfg.use_parallel);
    }

    #[test]
    fn nan_threshold_rejected() {
        let cfg = MatchConfig::new(MatchStrategy::Semantic, f64::NAN);
        let err = cfg.validate().expect_err("NaN threshold");
        assert!(matches!(err, MatchError::InvalidThreshold(t) if t.is_nan()));
    }

    #[test]
    fn infinite_threshold_rejected() {
        let cfg = MatchConfig::new(MatchStrategy::Semantic, f64::NEG_INFINITY);
        let err = cfg.validate().expect_err("infinite threshold");
        assert_eq!(err, MatchError::InvalidThreshold(f64::NEG_INFINITY));
    }

    #[test]
    fn zero_max_results_rejected() {
        let cfg = MatchConfig::new(MatchStrategy::Lexical, 0.5).with_max_results(0);
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("max_results")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_version_rejected() {
        let cfg = MatchConfig {
            version: 0,
            ..MatchConfig::new(MatchStrategy::Lexical, 0.5)
        };
        let err = cfg.validate().expect_err("version 0");
        assert!(matches!(err, MatchError::InvalidConfig(_)));
    }

    fn parse(name: &str) -> Result<MatchStrategy, MatchError> {
        name.parse()
    }

    #[test]
    fn strategy_parses_names_and_scan_labels() {
        assert_eq!(parse("lexical"), Ok(MatchStrategy::Lexical));
        assert_eq!(parse("Semantic"), Ok(MatchStrategy::Semantic));
        assert_eq!(parse("Default Scan"), Ok(MatchStrategy::Lexical));
        assert_eq!(parse(" advanced scan "), Ok(MatchStrategy::Semantic));
        assert_eq!(
            parse("fuzzy"),
            Err(MatchError::UnknownStrategy("fuzzy".into()))
        );
    }

    #[test]
    fn strategy_display_roundtrips_through_parse() {
        for strategy in [MatchStrategy::Lexical, MatchStrategy::Semantic] {
            assert_eq!(parse(&strategy.to_string()), Ok(strategy));
        }
    }

    #[test]
    fn document_from_utf8_rejects_invalid_bytes() {
        let err = Document::from_utf8("bad", vec![0xff, 0xfe, 0x00]).expect_err("invalid utf-8");
        match err {
            MatchError::InvalidInput(msg) => assert!(msg.contains("bad")),
            other => panic!("unexpected error: {other}"),
        }

        let doc = Document::from_utf8("ok", "héllo".as_bytes().to_vec()).expect("valid utf-8");
        assert_eq!(doc.text(), "héllo");
        assert_eq!(doc.doc_id(), "ok");
    }

    #[test]
    fn config_serde_requires_threshold() {
        let parsed: Result<MatchConfig, _> = serde_json::from_str(r#"{"strategy":"lexical"}"#);
        assert!(parsed.is_err());

        let cfg: MatchConfig =
            serde_json::from_str(r#"{"strategy":"semantic","threshold":0.25}"#).unwrap();
        assert_eq!(cfg, MatchConfig::new(MatchStrategy::Semantic, 0.25));
    }
}
