//! Canonical concept URIs for a multilingual knowledge graph.
//!
//! The same idea written with different casing, punctuation, underscores or a
//! regional language-code variant always maps to the same URI:
//!
//! ```
//! use conceptnorm::{get_uri_language, standardized_concept_uri, topic_to_concept};
//!
//! assert_eq!(standardized_concept_uri("EN", "A big dog!"), "/c/en/big_dog");
//! assert_eq!(standardized_concept_uri("zh_tw", "猫"), standardized_concept_uri("cmn", "猫"));
//! assert_eq!(topic_to_concept("en", "Township (United States)"), "/c/en/township/n/wp/united_states");
//! assert_eq!(get_uri_language("/c/zh/猫"), Some("zh"));
//! ```

pub mod concept;
pub mod filter;
pub mod lang;
pub mod standardize;
pub mod tokenize;
pub mod unicode;
pub mod uri;

#[cfg(test)]
mod testing;

#[allow(deprecated)]
pub use concept::{normalized_concept_name, standardized_concept_name};
pub use concept::{
    ConceptError, ConceptNormalizer, ConceptNormalizerBuilder, get_uri_language,
    normalized_concept_uri, standardize_concept_uri, standardized_concept_uri,
    standardized_concept_uri_with, topic_to_concept,
};
pub use filter::{EnglishFilter, NoFilter, TokenFilter, token_filter_for};
pub use lang::{LangTier, canonical_language};
pub use standardize::{standardize_text, valid_concept_name};
pub use tokenize::{Tokens, simple_tokenize};
pub use uri::{ConceptUri, UriError};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
