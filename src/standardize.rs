//! Text standardization: the string that names a concept.

use std::borrow::Cow;

use memchr::memchr;

use crate::{filter::TokenFilter, tokenize::simple_tokenize};

/// Get a string made from the tokens in `text`, joined by underscores.
///
/// Underscores in the input act as spaces. Tokens are lowercased and stripped
/// of punctuation by the tokenizer, then passed through `token_filter` when one
/// is given. The result may be empty.
///
/// ```
/// use conceptnorm::{EnglishFilter, standardize_text};
///
/// assert_eq!(standardize_text(" cat", None), "cat");
/// assert_eq!(standardize_text("a big dog", None), "a_big_dog");
/// assert_eq!(standardize_text("a big dog", Some(&EnglishFilter)), "big_dog");
/// assert_eq!(standardize_text("test/test", None), "test_test");
/// assert_eq!(standardize_text(",", None), "");
/// ```
pub fn standardize_text(text: &str, token_filter: Option<&dyn TokenFilter>) -> String {
    let spaced = underscores_to_spaces(text);
    let tokens = simple_tokenize(&spaced);
    let tokens = match token_filter {
        Some(filter) if filter.needs_apply(&tokens) => filter.apply(tokens),
        _ => tokens,
    };
    tokens.join("_")
}

/// Whether `text` can reasonably become a concept: standardizing it without a
/// filter must leave something. Rejects empty strings, whitespace and bare
/// punctuation.
#[inline]
pub fn valid_concept_name(text: &str) -> bool {
    !standardize_text(text, None).is_empty()
}

#[inline(always)]
pub(crate) fn underscores_to_spaces(text: &str) -> Cow<'_, str> {
    match memchr(b'_', text.as_bytes()) {
        Some(_) => Cow::Owned(text.replace('_', " ")),
        None => Cow::Borrowed(text),
    }
}
