//! Fixed word sets driving the pipeline: Turkish stopwords plus the manually
//! curated positive/negative sentiment lexicon. All sets are read-only after
//! construction; the analyzer receives them by reference so tests can swap in
//! their own lexicons.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Deserialize;

static TURKISH: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../turkish_lexicon.json");
    Lexicon::from_json(raw).expect("valid Turkish lexicon")
});

/// The embedded default lexicon, parsed once at first use.
pub fn turkish() -> &'static Lexicon {
    &TURKISH
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    stopwords: Vec<String>,
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Stopword set plus the two sentiment word sets. Immutable once built.
#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from explicit sets. Fails if a word appears in both
    /// sentiment sets: a word counting toward `p` and `n` at the same time
    /// has no defined meaning, so we refuse the lexicon up front instead of
    /// producing skewed scores later.
    pub fn new(
        stopwords: HashSet<String>,
        positive: HashSet<String>,
        negative: HashSet<String>,
    ) -> anyhow::Result<Self> {
        let mut overlap: Vec<&str> = positive
            .intersection(&negative)
            .map(String::as_str)
            .collect();
        if !overlap.is_empty() {
            overlap.sort_unstable();
            anyhow::bail!(
                "sentiment lexicon sets must be disjoint; words in both: {}",
                overlap.join(", ")
            );
        }
        Ok(Self {
            stopwords,
            positive,
            negative,
        })
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let file: LexiconFile = serde_json::from_str(raw)?;
        Self::new(
            file.stopwords.into_iter().collect(),
            file.positive.into_iter().collect(),
            file.negative.into_iter().collect(),
        )
    }

    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    #[inline]
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    #[inline]
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }
}
