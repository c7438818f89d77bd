//! Per-comment sentiment scoring over the positive/negative word sets.

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::token::valid_words;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

/// Normalized sentiment of a single comment. `positive + negative == 1.0`
/// always holds: the scores are shares of lexicon hits, not raw counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentSentiment {
    pub positive: f64,
    pub negative: f64,
    pub label: Label,
}

/// Score one comment against the lexicon. Returns `None` when the comment has
/// no valid words or no lexicon hits at all; such a comment is unscorable,
/// not neutral, and contributes nothing to batch aggregates.
///
/// The input stream is [`valid_words`], which keeps stopwords. Equal positive
/// and negative counts resolve to [`Label::Negative`]; the tie-break is
/// deliberate, not an omission.
pub fn score_comment(text: &str, lexicon: &Lexicon) -> Option<CommentSentiment> {
    let words = valid_words(text);
    if words.is_empty() {
        return None;
    }

    let p = words.iter().filter(|w| lexicon.is_positive(w)).count();
    let n = words.iter().filter(|w| lexicon.is_negative(w)).count();
    let total = p + n;
    if total == 0 {
        return None;
    }

    let positive = p as f64 / total as f64;
    let negative = n as f64 / total as f64;
    let label = if positive > negative {
        Label::Positive
    } else {
        Label::Negative
    };

    Some(CommentSentiment {
        positive,
        negative,
        label,
    })
}
