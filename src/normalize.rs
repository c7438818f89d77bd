//! Text normalization: Turkish-aware lower-casing, punctuation removal, and
//! whitespace collapsing. Pure functions, no failure mode.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\s]").expect("non-letter regex"));
static MULTI_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Lower-case with Turkish casing rules. The standard Unicode mapping turns
/// `İ` into `i` plus a combining dot and `I` into `i`; Turkish wants plain
/// `i` and dotless `ı` respectively.
fn lower_turkish(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Canonical form of a raw comment: lower-cased, every non-letter replaced by
/// a space, runs of whitespace collapsed, ends trimmed. Total over any input;
/// the empty string normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    let lowered = lower_turkish(text);
    let stripped = NON_LETTER.replace_all(&lowered, " ");
    MULTI_WS.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_turkish_letters() {
        assert_eq!(normalize("IŞIK"), "ışık");
        assert_eq!(normalize("İyi Film"), "iyi film");
        assert_eq!(normalize("GÜZEL"), "güzel");
    }

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(normalize("harika!!! 10/10, izleyin..."), "harika izleyin");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  çok \t güzel \n film  "), "çok güzel film");
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!?!? 123"), "");
    }

    #[test]
    fn idempotent_on_normalized_text() {
        let once = normalize("Bu film; GERÇEKTEN harika!");
        assert_eq!(normalize(&once), once);
    }
}
