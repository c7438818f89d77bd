//! Word tokenization and validity filtering.
//!
//! Two deliberately separate passes over a comment:
//! - `tokenize` feeds keyword extraction: validity filter plus stopword
//!   removal.
//! - `valid_words` feeds sentiment scoring: validity filter only. Stopwords
//!   rarely carry sentiment but would dominate keyword frequencies, so the
//!   scorer keeps them while the keyword stream drops them. Do not unify the
//!   two, it would silently change sentiment results.

use crate::lexicon::Lexicon;
use crate::normalize::normalize;

/// Words shorter than this never count as tokens.
pub const MIN_WORD_LENGTH: usize = 2;

/// A word is valid iff it is at least [`MIN_WORD_LENGTH`] letters, entirely
/// alphabetic (Turkish diacritics included), and digit-free.
pub fn is_valid_word(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
        && word.chars().all(char::is_alphabetic)
        && !word.chars().any(char::is_numeric)
}

/// Normalize, split on whitespace, keep valid non-stopword tokens.
/// Pure function of its input; an empty or all-junk comment yields an empty
/// vec.
pub fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| is_valid_word(w))
        .filter(|w| !lexicon.is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Normalize and keep every valid word, stopwords included. This is the
/// sentiment scorer's input stream.
pub fn valid_words(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .filter(|w| is_valid_word(w))
        .map(str::to_string)
        .collect()
}
