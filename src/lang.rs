pub mod data;

use std::{
    borrow::Cow,
    collections::BTreeSet,
    sync::LazyLock,
};

use tracing::trace;

pub use data::{
    COMMON, COMMON_ARTIFICIAL, COMMON_HISTORICAL, CORE_LANGUAGES, LANGUAGE_NAME_OVERRIDES,
    LCODE_ALIASES, LangTier, MORE, MORE_ARTIFICIAL, MORE_HISTORICAL,
};

/// Language of the default token filter.
pub const ENGLISH: &str = "en";

/// Union of the three `common*` tiers.
pub static COMMON_LANGUAGES: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| union_of(|tier| tier.is_common()));

/// Every supported language.
pub static ALL_LANGUAGES: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| union_of(|_| true));

/// Union of the two historical tiers.
pub static HISTORICAL_LANGUAGES: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| union_of(|tier| tier.is_historical()));

fn union_of(pick: impl Fn(LangTier) -> bool) -> BTreeSet<&'static str> {
    LangTier::ALL
        .iter()
        .copied()
        .filter(|&tier| pick(tier))
        .flat_map(|tier| tier.codes().iter().copied())
        .collect()
}

/// Resolve a raw language code to its canonical form.
///
/// The code is lowercased and then replaced through [`LCODE_ALIASES`] when it
/// has an entry. Unknown codes pass through unchanged; see [`is_supported`]
/// for a membership check. Borrows when no change is needed.
///
/// ```
/// use conceptnorm::lang::canonical_language;
///
/// assert_eq!(canonical_language("EN"), "en");
/// assert_eq!(canonical_language("zh-TW"), "zh");
/// assert_eq!(canonical_language("xx-unknown"), "xx-unknown");
/// ```
pub fn canonical_language(code: &str) -> Cow<'_, str> {
    let lowered = if code.chars().any(char::is_uppercase) {
        Cow::Owned(code.to_lowercase())
    } else {
        Cow::Borrowed(code)
    };
    match LCODE_ALIASES.get(&*lowered) {
        Some(&canonical) => {
            trace!(raw = code, canonical, "merged language code");
            Cow::Borrowed(canonical)
        }
        None => lowered,
    }
}

/// The tier a canonical code belongs to, if it is supported at all.
#[inline]
pub fn tier_of(code: &str) -> Option<LangTier> {
    LangTier::ALL
        .iter()
        .copied()
        .find(|tier| tier.codes().contains(code))
}

#[inline]
pub fn is_supported(code: &str) -> bool {
    tier_of(code).is_some()
}

#[inline]
pub fn is_common(code: &str) -> bool {
    tier_of(code).is_some_and(LangTier::is_common)
}

#[inline]
pub fn is_historical(code: &str) -> bool {
    tier_of(code).is_some_and(LangTier::is_historical)
}

/// Human-readable name to use instead of a generic lookup, if one is defined.
#[inline]
pub fn language_name_override(code: &str) -> Option<&'static str> {
    LANGUAGE_NAME_OVERRIDES.get(code).copied()
}
