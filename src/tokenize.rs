//! Word tokenizer used by every standardization path.
//!
//! Text is put in NFC first, so a base letter followed by a combining mark
//! ends up as the same precomposed token as the already-composed spelling.
//! Word boundaries follow UAX #29; segments that contain no letter or digit
//! (punctuation, whitespace, symbols) are dropped. Adjacent words written in
//! a spaceless script (Han, Kana, Thai, ...) are joined back into one token,
//! since UAX #29 alone would split every ideograph. Tokens are lowercased.

use std::sync::LazyLock;

use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

use crate::unicode::is_spaceless;

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// An ordered token sequence. Most concept texts are a handful of words.
pub type Tokens = SmallVec<[String; 8]>;

/// Split `text` into lowercase word tokens.
///
/// ```
/// use conceptnorm::tokenize::simple_tokenize;
///
/// assert_eq!(simple_tokenize("Test?! test/test").as_slice(), ["test", "test", "test"]);
/// assert_eq!(simple_tokenize("u\u{308}ber").as_slice(), ["über"]);
/// ```
pub fn simple_tokenize(text: &str) -> Tokens {
    let composed = ICU4X_NFC.normalize(text);
    let composed: &str = &composed;

    let mut tokens = Tokens::new();
    // Byte span of the token being built.
    let mut run: Option<(usize, usize)> = None;
    for (start, segment) in composed.unicode_word_indices() {
        // UAX #29 glues a combining mark onto the space or punctuation in
        // front of it; the word starts at the first letter or digit.
        let word = segment.trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        let end = start + segment.len();
        let start = end - word.len();
        run = match run {
            Some((s, e)) if e == start && joins(&composed[s..e], word) => Some((s, end)),
            Some((s, e)) => {
                tokens.push(composed[s..e].to_lowercase());
                Some((start, end))
            }
            None => Some((start, end)),
        };
    }
    if let Some((s, e)) = run {
        tokens.push(composed[s..e].to_lowercase());
    }
    tokens
}

#[inline(always)]
fn joins(prev: &str, next: &str) -> bool {
    prev.chars().next_back().is_some_and(is_spaceless)
        && next.chars().next().is_some_and(is_spaceless)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        simple_tokenize(text).into_vec()
    }

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        assert_eq!(tokens("a big dog"), ["a", "big", "dog"]);
        assert_eq!(tokens("test/test"), ["test", "test"]);
        assert_eq!(tokens("embedded\ttab\nnewline"), ["embedded", "tab", "newline"]);
        assert_eq!(tokens("Test?!"), ["test"]);
        assert_eq!(tokens("TEST."), ["test"]);
    }

    #[test]
    fn keeps_word_internal_apostrophes() {
        assert_eq!(tokens("Can't stop"), ["can't", "stop"]);
    }

    #[test]
    fn composes_combining_marks() {
        assert_eq!(tokens("   u\u{0308}ber\n"), ["über"]);
        assert_eq!(tokens("cafe\u{0301}"), ["café"]);
    }

    #[test]
    fn punctuation_only_yields_nothing() {
        for input in ["", " ", ",", ",,", "/", "?!", "\t\n", "—"] {
            assert!(simple_tokenize(input).is_empty(), "{input:?}");
        }
    }

    #[test]
    fn lowercases_non_ascii() {
        assert_eq!(tokens("ÉCOLE Straße"), ["école", "straße"]);
    }

    #[test]
    fn spaceless_runs_stay_whole() {
        assert_eq!(tokens("北京"), ["北京"]);
        assert_eq!(tokens("東京タワー"), ["東京タワー"]);
        assert_eq!(tokens("北京 上海"), ["北京", "上海"]);
        assert_eq!(tokens("北京、上海"), ["北京", "上海"]);
        assert_eq!(tokens("北京2008"), ["北京", "2008"]);
        assert_eq!(tokens("AI人工智能"), ["ai", "人工智能"]);
        assert_eq!(tokens("한국어 사전"), ["한국어", "사전"]);
    }

    #[test]
    fn marks_after_whitespace_do_not_capture_it() {
        assert_eq!(tokens("क ा"), ["क", "ा"]);
        assert_eq!(tokens("क\tा"), ["क", "ा"]);
        assert_eq!(tokens("क,ा"), ["क", "ा"]);
        assert_eq!(tokens("\u{dd6} \u{c4a}"), ["\u{dd6}", "\u{c4a}"]);
        for token in tokens("नमस्ते ा दुनिया") {
            assert!(!token.contains(char::is_whitespace), "{token:?}");
        }
    }

    #[test]
    fn numbers_are_words() {
        assert_eq!(tokens("route 66"), ["route", "66"]);
    }
}
