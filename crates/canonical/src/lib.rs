//! docmatch canonical text layer.
//!
//! Turns raw document text into the token form the semantic matcher scores.
//!
//! ## What we do
//!
//! - Lower-casing (Unicode, locale free)
//! - Deleting every character that is not a word character or whitespace
//! - Splitting on whitespace
//! - Dropping the fixed stop-word list ([`STOP_WORDS`])
//! - Stemming with English Snowball rules
//!
//! The raw word form used by the lexical matcher is also produced here
//! ([`word_frequency_tokens`]) so that both matchers agree on what a word
//! character is.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence, no mutable shared state.
//! Same text in, same tokens out.
//!
//! ```rust
//! use canonical::normalize;
//!
//! let tokens = normalize("The cats kept running!");
//! let words: Vec<&str> = tokens.iter().collect();
//! assert_eq!(words, vec!["cat", "kept", "run"]);
//! ```

mod filter;
mod pipeline;
mod stem;
mod stopwords;
mod token;

pub use crate::filter::{is_word_char, strip_non_word};
pub use crate::pipeline::{normalize, normalize_with};
pub use crate::stem::Stemmer;
pub use crate::stopwords::{is_stop_word, remove_stop_words, STOP_WORDS};
pub use crate::token::{split_words, word_frequency_tokens, TokenSequence};
