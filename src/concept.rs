//! Concept URIs: standardized text in a canonical language.
//!
//! [`ConceptNormalizer`] owns the choice of token filter per language. The
//! free functions in this module use a process-wide default whose only filter
//! is [`EnglishFilter`] for `en`.

use std::{collections::HashMap, sync::Arc, sync::LazyLock};

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    filter::{EnglishFilter, NO_FILTER, TokenFilter},
    lang::{ENGLISH, canonical_language},
    standardize::{standardize_text, underscores_to_spaces},
    uri::{concept_uri, is_assertion, is_concept, parse_possible_compound_uri, split_uri},
};

/// Part-of-speech qualifier for nouns.
pub const POS_NOUN: &str = "n";
/// Source qualifier for Wikipedia-style article titles.
pub const SOURCE_WIKIPEDIA: &str = "wp";

/// `Title (disambiguation)`, matched at the start of the topic only.
static TOPIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^(]+) \(([^)]+)\)").expect("topic pattern is a valid regex")
});

static DEFAULT_NORMALIZER: LazyLock<ConceptNormalizer> =
    LazyLock::new(|| ConceptNormalizer::builder().build());

#[derive(Debug, Error)]
pub enum ConceptError {
    #[error("`{name}` has been removed. Use `{replacement}` instead.")]
    Removed {
        name: &'static str,
        replacement: &'static str,
    },
}

/// Builds concept URIs with a configurable filter per language.
#[derive(Clone)]
pub struct ConceptNormalizer {
    filters: HashMap<String, Arc<dyn TokenFilter>>,
}

impl Default for ConceptNormalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for ConceptNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut filters: Vec<_> = self
            .filters
            .iter()
            .map(|(lang, filter)| (lang.as_str(), filter.name()))
            .collect();
        filters.sort_unstable();
        f.debug_struct("ConceptNormalizer")
            .field("filters", &filters)
            .finish()
    }
}

impl ConceptNormalizer {
    pub fn builder() -> ConceptNormalizerBuilder {
        ConceptNormalizerBuilder::default()
    }

    /// Filter registered for a canonical language code, or [`NoFilter`](crate::filter::NoFilter).
    pub fn filter_for(&self, lang: &str) -> &dyn TokenFilter {
        match self.filters.get(lang) {
            Some(filter) => filter.as_ref(),
            None => &NO_FILTER,
        }
    }

    /// Standardize `text` as it would appear in a concept of language `lang`.
    pub fn standardize(&self, lang: &str, text: &str) -> String {
        let lang = canonical_language(lang);
        standardize_text(text, Some(self.filter_for(&lang)))
    }

    /// Concept URI for `text` in `lang`, with no qualifiers.
    pub fn concept_uri(&self, lang: &str, text: &str) -> String {
        self.concept_uri_with(lang, text, std::iter::empty::<&str>())
    }

    /// Concept URI for `text` in `lang` followed by qualifier segments.
    ///
    /// `lang` is canonicalized first and selects the filter. Every qualifier
    /// goes through the same standardization as `text`; `None` qualifiers are
    /// left out entirely.
    pub fn concept_uri_with<'q, I, Q>(&self, lang: &str, text: &str, qualifiers: I) -> String
    where
        I: IntoIterator<Item = Q>,
        Q: Into<Option<&'q str>>,
    {
        let lang = canonical_language(lang);
        let filter = Some(self.filter_for(&lang));
        let text = standardize_text(text, filter);
        let more: Vec<String> = qualifiers
            .into_iter()
            .filter_map(|q: Q| -> Option<&'q str> { q.into() })
            .map(|q| standardize_text(q, filter))
            .collect();
        concept_uri(&lang, &text, more.iter().map(String::as_str))
    }

    /// Concept URI for a topic title, disambiguated as a noun when the title
    /// has the form `Title (disambiguation)`.
    ///
    /// Only a prefix has to match: anything after the closing parenthesis is
    /// ignored.
    pub fn topic_to_concept(&self, lang: &str, topic: &str) -> String {
        let topic = underscores_to_spaces(topic);
        match TOPIC_RE.captures(&topic) {
            Some(caps) => self.concept_uri_with(
                lang,
                &caps[1],
                [POS_NOUN, SOURCE_WIKIPEDIA, &caps[2]],
            ),
            None => self.concept_uri(lang, &topic),
        }
    }
}

pub struct ConceptNormalizerBuilder {
    filters: HashMap<String, Arc<dyn TokenFilter>>,
}

impl Default for ConceptNormalizerBuilder {
    fn default() -> Self {
        let mut filters: HashMap<String, Arc<dyn TokenFilter>> = HashMap::new();
        filters.insert(ENGLISH.to_owned(), Arc::new(EnglishFilter));
        Self { filters }
    }
}

impl ConceptNormalizerBuilder {
    /// Register `filter` for `lang`, replacing any previous one. The code is
    /// canonicalized, so `"nb"` registers for `"no"`.
    pub fn filter<F: TokenFilter + 'static>(mut self, lang: &str, filter: F) -> Self {
        self.filters
            .insert(canonical_language(lang).into_owned(), Arc::new(filter));
        self
    }

    /// Drop every registered filter, including the default English one.
    pub fn without_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    pub fn build(self) -> ConceptNormalizer {
        ConceptNormalizer {
            filters: self.filters,
        }
    }
}

/// Make the URI for a concept in `lang`: canonicalize the language, filter
/// and standardize the text, and join them.
///
/// ```
/// use conceptnorm::standardized_concept_uri;
///
/// assert_eq!(standardized_concept_uri("en", "this is a test"), "/c/en/this_is_test");
/// assert_eq!(standardized_concept_uri("zh_TW", "猫"), "/c/zh/猫");
/// ```
pub fn standardized_concept_uri(lang: &str, text: &str) -> String {
    DEFAULT_NORMALIZER.concept_uri(lang, text)
}

/// [`standardized_concept_uri`] with qualifier segments, such as a part of
/// speech and a disambiguation. `None` entries are skipped.
///
/// ```
/// use conceptnorm::standardized_concept_uri_with;
///
/// assert_eq!(
///     standardized_concept_uri_with("en", "this is a test", ["n", "example phrase"]),
///     "/c/en/this_is_test/n/example_phrase"
/// );
/// assert_eq!(
///     standardized_concept_uri_with("en", "cat", [Some("n"), None]),
///     "/c/en/cat/n"
/// );
/// ```
pub fn standardized_concept_uri_with<'q, I, Q>(lang: &str, text: &str, qualifiers: I) -> String
where
    I: IntoIterator<Item = Q>,
    Q: Into<Option<&'q str>>,
{
    DEFAULT_NORMALIZER.concept_uri_with(lang, text, qualifiers)
}

pub use standardized_concept_uri as normalized_concept_uri;
pub use standardized_concept_uri as standardize_concept_uri;

/// Concept URI for a Wikipedia-style topic title.
///
/// ```
/// use conceptnorm::topic_to_concept;
///
/// assert_eq!(
///     topic_to_concept("en", "Township (United States)"),
///     "/c/en/township/n/wp/united_states"
/// );
/// ```
pub fn topic_to_concept(lang: &str, topic: &str) -> String {
    DEFAULT_NORMALIZER.topic_to_concept(lang, topic)
}

/// Language of a concept URI, or of the first concept inside an assertion.
///
/// The language segment is returned as stored, even when empty; it is not
/// re-canonicalized. Any other kind of URI, or a malformed assertion, has no
/// language.
pub fn get_uri_language(uri: &str) -> Option<&str> {
    if is_assertion(uri) {
        match parse_possible_compound_uri("a", uri) {
            Ok(args) => args.into_iter().find_map(get_uri_language),
            Err(e) => {
                debug!(uri, error = %e, "unparseable assertion uri");
                None
            }
        }
    } else if is_concept(uri) {
        split_uri(uri).get(1).copied()
    } else {
        None
    }
}

/// Removed: concept names are now produced by [`standardize_text`].
#[deprecated(note = "use `standardize_text` instead")]
pub fn standardized_concept_name(_lang: &str, _text: &str) -> Result<String, ConceptError> {
    let err = ConceptError::Removed {
        name: "standardized_concept_name",
        replacement: "standardize_text",
    };
    warn!(error = %err, "removed function called");
    Err(err)
}

#[allow(deprecated)]
pub use standardized_concept_name as normalized_concept_name;
