use std::fmt;
use std::sync::OnceLock;

use rust_stemmers::Algorithm;

/// Suffix-stripping stemmer (English Snowball rules, the Porter family).
///
/// Holds no mutable state, so one instance can be shared across threads.
/// [`Stemmer::english`] hands out a process-wide instance.
pub struct Stemmer {
    inner: rust_stemmers::Stemmer,
}

impl Stemmer {
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }

    /// Shared English stemmer.
    pub fn english() -> &'static Stemmer {
        static STEMMER: OnceLock<Stemmer> = OnceLock::new();
        STEMMER.get_or_init(Stemmer::new)
    }

    /// Stem a single lower-cased token.
    pub fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }

    /// Stem each token, preserving order.
    pub fn stem_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens.iter().map(|t| self.stem(t.as_ref())).collect()
    }
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Stemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stemmer")
            .field("algorithm", &"english")
            .finish()
    }
}
