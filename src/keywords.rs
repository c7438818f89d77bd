//! Frequency-based keyword extraction over the stopword-filtered token
//! stream of a whole comment batch.

use std::collections::HashMap;

use serde::Serialize;

/// Tokens occurring fewer times than this are never reported, even when the
/// result would otherwise stay under `top_n`.
pub const MIN_FREQUENCY: usize = 2;

/// Default number of keywords in a summary.
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
}

/// Most frequent tokens across the batch, sorted by count descending and
/// truncated to `top_n`. Ties keep first-seen order (the frequency table is
/// built in encounter order and the sort is stable). May return fewer than
/// `top_n` entries, including none.
pub fn extract_keywords(tokens: &[String], top_n: usize) -> Vec<KeywordEntry> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(tokens.len());
    let mut entries: Vec<KeywordEntry> = Vec::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(token.as_str(), entries.len());
                entries.push(KeywordEntry {
                    word: token.clone(),
                    count: 1,
                });
            }
        }
    }

    entries.retain(|e| e.count >= MIN_FREQUENCY);
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(top_n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counts_and_sorts_descending() {
        let tokens = toks(&["film", "oyun", "film", "film", "oyun", "ses"]);
        let kw = extract_keywords(&tokens, 5);
        assert_eq!(
            kw,
            vec![
                KeywordEntry { word: "film".into(), count: 3 },
                KeywordEntry { word: "oyun".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn singletons_are_never_reported() {
        let tokens = toks(&["bir", "iki", "üç"]);
        assert!(extract_keywords(&tokens, 5).is_empty());
    }

    #[test]
    fn ties_break_by_first_seen_order() {
        let tokens = toks(&["oyun", "film", "oyun", "film", "ses", "ses"]);
        let kw = extract_keywords(&tokens, 5);
        let words: Vec<&str> = kw.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["oyun", "film", "ses"]);
    }

    #[test]
    fn truncates_to_top_n() {
        let tokens = toks(&["aa", "aa", "bb", "bb", "cc", "cc", "dd", "dd"]);
        let kw = extract_keywords(&tokens, 2);
        assert_eq!(kw.len(), 2);
        assert_eq!(kw[0].word, "aa");
        assert_eq!(kw[1].word, "bb");
    }

    #[test]
    fn empty_token_stream() {
        assert!(extract_keywords(&[], 5).is_empty());
    }
}
