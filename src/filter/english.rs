use phf::{Set, phf_set};
use smallvec::SmallVec;

use crate::{filter::TokenFilter, tokenize::Tokens};

/// Articles are removed anywhere in the phrase.
static STOPWORDS: Set<&'static str> = phf_set! { "the", "a", "an" };

/// Infinitive marker, removed only while it leads the phrase.
const DROP_FIRST: &[&str] = &["to"];

/// English stopword filter.
///
/// Removes `the`, `a` and `an`, then any leading `to`, so `"to go"` and
/// `"go"` name the same concept. When nothing would survive, the input is
/// returned unchanged: `"the"` is still a concept.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishFilter;

impl TokenFilter for EnglishFilter {
    fn name(&self) -> &'static str {
        "english"
    }

    #[inline]
    fn needs_apply(&self, tokens: &[String]) -> bool {
        tokens
            .first()
            .is_some_and(|t| DROP_FIRST.contains(&t.as_str()))
            || tokens.iter().any(|t| STOPWORDS.contains(t.as_str()))
    }

    fn apply(&self, mut tokens: Tokens) -> Tokens {
        let mut leading = true;
        let keep: SmallVec<[bool; 8]> = tokens
            .iter()
            .map(|t| {
                let t = t.as_str();
                if STOPWORDS.contains(t) || (leading && DROP_FIRST.contains(&t)) {
                    return false;
                }
                leading = false;
                true
            })
            .collect();

        if !keep.contains(&true) {
            return tokens;
        }
        let mut flags = keep.into_iter();
        tokens.retain(|_| flags.next().unwrap_or(true));
        tokens
    }
}
