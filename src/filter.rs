//! Token filters – the language-specific step of standardization.
//!
//! A filter maps a token sequence to a (usually shorter) token sequence, for
//! example by dropping function words. Filters are selected by *canonical*
//! language code at the call boundary; languages with nothing registered use
//! [`NoFilter`].

pub mod english;

use crate::{lang::ENGLISH, tokenize::Tokens};

pub use english::EnglishFilter;

/// A single token-sequence transformation.
pub trait TokenFilter: Send + Sync {
    /// Human-readable name – used in logs and test failures.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips [`TokenFilter::apply`] entirely.
    fn needs_apply(&self, tokens: &[String]) -> bool;

    /// Transform the sequence. Order of surviving tokens must be preserved.
    fn apply(&self, tokens: Tokens) -> Tokens;
}

/// Identity filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFilter;

impl TokenFilter for NoFilter {
    fn name(&self) -> &'static str {
        "none"
    }

    #[inline(always)]
    fn needs_apply(&self, _tokens: &[String]) -> bool {
        false
    }

    #[inline(always)]
    fn apply(&self, tokens: Tokens) -> Tokens {
        tokens
    }
}

pub(crate) static NO_FILTER: NoFilter = NoFilter;
static ENGLISH_FILTER: EnglishFilter = EnglishFilter;

/// Built-in filter for a canonical language code.
#[inline]
pub fn token_filter_for(lang: &str) -> &'static dyn TokenFilter {
    if lang == ENGLISH {
        &ENGLISH_FILTER
    } else {
        &NO_FILTER
    }
}
