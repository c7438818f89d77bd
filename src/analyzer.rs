//! Batch aggregation: runs every comment through tokenization and sentiment
//! scoring and folds the results into one [`AnalysisSummary`].
//!
//! Per-comment failures never surface. A comment that yields no tokens, or
//! tokens but no lexicon hits, is silently excluded from the aggregates; the
//! only non-success outcomes are the two batch-level warnings.

use serde::Serialize;
use tracing::debug;

use crate::keywords::{extract_keywords, KeywordEntry, DEFAULT_TOP_N};
use crate::lexicon::Lexicon;
use crate::sentiment::{score_comment, Label};
use crate::token::tokenize;

const MSG_EMPTY_BATCH: &str = "Analiz edilecek yorum bulunamadı.";
const MSG_NO_SCORABLE: &str = "Analiz edilebilecek geçerli yorum bulunamadı.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
    /// Reserved for the enclosing service (storage failures and the like);
    /// the pipeline itself never produces it.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
}

/// Aggregate block of a successful analysis. Field names are part of the
/// response contract consumed by the movie site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub total_comments: usize,
    pub positive_comments: usize,
    pub negative_comments: usize,
    pub positive_ratio: f64,
    pub keywords: Vec<KeywordEntry>,
    pub sentiment_distribution: SentimentDistribution,
}

/// One result per batch. `analysis` is present iff `status` is `success`;
/// callers branch on `status`, never on a raised fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl AnalysisSummary {
    fn warning(message: &str) -> Self {
        Self {
            status: Status::Warning,
            message: message.to_string(),
            analysis: None,
        }
    }
}

/// Stateless comment analyzer over an injected lexicon. All accumulator
/// state lives inside one `analyze_comments` call, so a single instance can
/// serve concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct CommentAnalyzer<'a> {
    lexicon: &'a Lexicon,
    top_n: usize,
}

impl<'a> CommentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Analyze a batch of raw comments in one synchronous pass.
    ///
    /// A comment whose tokenization is empty is skipped outright and never
    /// reaches the scorer, even if it contains scorable stopwords. A comment
    /// with tokens but an unscorable sentiment still contributes its tokens
    /// to keyword extraction.
    pub fn analyze_comments(&self, comments: &[String]) -> AnalysisSummary {
        if comments.is_empty() {
            return AnalysisSummary::warning(MSG_EMPTY_BATCH);
        }

        let mut all_tokens: Vec<String> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();

        for comment in comments {
            let tokens = tokenize(comment, self.lexicon);
            if tokens.is_empty() {
                continue;
            }
            all_tokens.extend(tokens);

            match score_comment(comment, self.lexicon) {
                Some(sentiment) => labels.push(sentiment.label),
                None => continue,
            }
        }

        let total_comments = labels.len();
        debug!(
            batch = comments.len(),
            scorable = total_comments,
            tokens = all_tokens.len(),
            "comment batch analyzed"
        );
        if total_comments == 0 {
            return AnalysisSummary::warning(MSG_NO_SCORABLE);
        }

        let positive_comments = labels.iter().filter(|l| **l == Label::Positive).count();
        let negative_comments = total_comments - positive_comments;
        let keywords = extract_keywords(&all_tokens, self.top_n);

        AnalysisSummary {
            status: Status::Success,
            message: format!(
                "Yorum analizi tamamlandı. {total_comments} geçerli yorum analiz edildi."
            ),
            analysis: Some(Analysis {
                total_comments,
                positive_comments,
                negative_comments,
                positive_ratio: positive_comments as f64 / total_comments as f64,
                keywords,
                sentiment_distribution: SentimentDistribution {
                    positive: positive_comments,
                    negative: negative_comments,
                },
            }),
        }
    }
}
