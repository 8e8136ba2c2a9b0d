//! URI path utilities.
//!
//! Concepts are paths such as `/c/en/cat/n`. Compound URIs wrap a list of
//! other URIs in brackets after an operator, for example the assertion
//! `/a/[/r/IsA/,/c/en/cat/,/c/en/animal/]`. Arguments may themselves be
//! compound, so splitting is bracket-depth aware.

use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

pub const CONCEPT_PREFIX: &str = "/c/";
pub const ASSERTION_PREFIX: &str = "/a/";

/// Arguments of a compound URI, borrowed from the URI itself.
pub type UriArgs<'a> = SmallVec<[&'a str; 4]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UriError {
    #[error("`{0}` is not a compound URI")]
    NotCompound(String),

    #[error("unbalanced brackets in compound URI `{0}`")]
    Unbalanced(String),
}

/// Join path pieces into a URI, trimming stray slashes from each piece.
///
/// ```
/// use conceptnorm::uri::join_uri;
///
/// assert_eq!(join_uri(["/c", "en", "cat/"]), "/c/en/cat");
/// ```
pub fn join_uri<'a>(pieces: impl IntoIterator<Item = &'a str>) -> String {
    let mut uri = String::new();
    for piece in pieces {
        uri.push('/');
        uri.push_str(piece.trim_matches('/'));
    }
    if uri.is_empty() {
        uri.push('/');
    }
    uri
}

/// Split a URI into its path components.
///
/// ```
/// use conceptnorm::uri::split_uri;
///
/// assert_eq!(split_uri("/c/en/cat/n/animal").as_slice(), ["c", "en", "cat", "n", "animal"]);
/// assert!(split_uri("/").is_empty());
/// ```
pub fn split_uri(uri: &str) -> SmallVec<[&str; 8]> {
    let uri = uri.trim_start_matches('/');
    if uri.is_empty() {
        return SmallVec::new();
    }
    uri.split('/').collect()
}

/// Concept URI from already-standardized pieces.
pub fn concept_uri<'a>(lang: &'a str, text: &'a str, more: impl IntoIterator<Item = &'a str>) -> String {
    join_uri(["/c", lang, text].into_iter().chain(more))
}

/// Compound URI `/op/[/arg1/,/arg2/]`.
///
/// ```
/// use conceptnorm::uri::compound_uri;
///
/// assert_eq!(compound_uri("/and", ["/c/en/a", "/c/en/b"]), "/and/[/c/en/a/,/c/en/b/]");
/// assert_eq!(compound_uri("/nothing", []), "/nothing/[/]");
/// ```
pub fn compound_uri<'a>(op: &str, args: impl IntoIterator<Item = &'a str>) -> String {
    let mut uri = String::from("/");
    uri.push_str(op.trim_matches('/'));
    uri.push_str("/[");
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            uri.push_str("/,");
        }
        uri.push('/');
        uri.push_str(arg.trim_matches('/'));
    }
    uri.push_str("/]");
    uri
}

/// Assertion URI relating `args` through `rel`.
pub fn assertion_uri<'a>(rel: &'a str, args: impl IntoIterator<Item = &'a str>) -> String {
    compound_uri("/a", std::iter::once(rel).chain(args))
}

/// Split a compound URI into its operator and arguments.
///
/// ```
/// use conceptnorm::uri::parse_compound_uri;
///
/// let (op, args) = parse_compound_uri("/a/[/r/CapableOf/,/c/en/cat/,/c/en/sleep/]").unwrap();
/// assert_eq!(op, "/a");
/// assert_eq!(args.as_slice(), ["/r/CapableOf", "/c/en/cat", "/c/en/sleep"]);
/// ```
pub fn parse_compound_uri(uri: &str) -> Result<(&str, UriArgs<'_>), UriError> {
    let not_compound = || UriError::NotCompound(uri.to_owned());
    let (op, _) = uri.split_once("/[/").ok_or_else(not_compound)?;
    if !uri.ends_with("/]") {
        return Err(not_compound());
    }

    // `body_start` is the slash in front of the first argument; arguments keep
    // their leading slash.
    let body_start = op.len() + 2;
    let body_end = uri.len() - 2;
    let mut args = UriArgs::new();
    if body_start >= body_end {
        return Ok((op, args));
    }

    let bytes = uri.as_bytes();
    let mut depth = 0usize;
    let mut item_start = body_start;
    for i in body_start + 1..body_end {
        match bytes[i] {
            b'[' => depth += 1,
            b']' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| UriError::Unbalanced(uri.to_owned()))?;
            }
            b',' if depth == 0 && bytes[i - 1] == b'/' && bytes[i + 1] == b'/' => {
                args.push(&uri[item_start..i - 1]);
                item_start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(UriError::Unbalanced(uri.to_owned()));
    }
    args.push(&uri[item_start..body_end]);
    Ok((op, args))
}

/// Arguments of `uri` if it is a compound with operator `op`, otherwise the
/// URI itself as a single item.
pub fn parse_possible_compound_uri<'a>(op: &str, uri: &'a str) -> Result<UriArgs<'a>, UriError> {
    let is_op = uri
        .strip_prefix('/')
        .and_then(|rest| rest.strip_prefix(op.trim_matches('/')))
        .is_some_and(|rest| rest.starts_with('/'));
    if is_op {
        parse_compound_uri(uri).map(|(_, args)| args)
    } else {
        Ok(SmallVec::from_slice(&[uri]))
    }
}

#[inline]
pub fn is_concept(uri: &str) -> bool {
    uri.starts_with(CONCEPT_PREFIX)
}

#[inline]
pub fn is_assertion(uri: &str) -> bool {
    uri.starts_with(ASSERTION_PREFIX)
}

/// Borrowed, parsed view of a concept URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptUri<'a> {
    pub language: &'a str,
    pub text: &'a str,
    pub qualifiers: SmallVec<[&'a str; 4]>,
}

impl<'a> ConceptUri<'a> {
    /// Parse `/c/<lang>/<text>[/<qualifier>...]`. Returns `None` for any
    /// other shape, including a concept URI with no text.
    pub fn parse(uri: &'a str) -> Option<Self> {
        if !is_concept(uri) {
            return None;
        }
        let mut pieces = split_uri(uri).into_iter().skip(1);
        let language = pieces.next().filter(|l| !l.is_empty())?;
        let text = pieces.next().filter(|t| !t.is_empty())?;
        Some(Self {
            language,
            text,
            qualifiers: pieces.collect(),
        })
    }

    /// Part of speech, by convention the first qualifier.
    #[inline]
    pub fn pos(&self) -> Option<&'a str> {
        self.qualifiers.first().copied()
    }
}

impl fmt::Display for ConceptUri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/c/{}/{}", self.language, self.text)?;
        for q in &self.qualifiers {
            write!(f, "/{q}")?;
        }
        Ok(())
    }
}
