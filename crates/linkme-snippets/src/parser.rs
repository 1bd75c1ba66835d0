//! Directive payload parsing.
//!
//! Parses the text between `{! CODEBLOCK` and `!}`: `path:marker key=value ...`

use std::collections::HashMap;

use crate::SnippetError;

/// Structured reference parsed from a directive payload.
///
/// # Example
///
/// ```
/// use linkme_snippets::parse_directive;
///
/// let reference = parse_directive("src/a.py:FOO margin=1:1 heading=Example").unwrap();
/// assert_eq!(reference.file_path, "src/a.py");
/// assert_eq!(reference.marker, "FOO");
/// assert_eq!(reference.get("margin"), Some("1:1"));
/// assert_eq!(reference.get("heading"), Some("Example"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveReference {
    /// Slash-delimited path relative to the project root.
    pub file_path: String,
    /// Substring identifying the anchor line.
    pub marker: String,
    /// All `key=value` options, recognized or not.
    pub options: HashMap<String, String>,
}

impl DirectiveReference {
    /// Get an option value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

/// Parse a directive payload into a [`DirectiveReference`].
///
/// The first whitespace-separated token is `path:marker`. Segments after the
/// second colon are ignored. Every following token is a `key=value` option;
/// tokens without exactly one `=` or with an empty key are skipped.
///
/// # Errors
///
/// Returns [`SnippetError::MalformedDirective`] if the first token is missing,
/// has no `:`, or has an empty path or marker.
pub fn parse_directive(payload: &str) -> Result<DirectiveReference, SnippetError> {
    let malformed = || SnippetError::MalformedDirective {
        directive: payload.trim().to_owned(),
    };

    let mut tokens = payload.split_whitespace();
    let target = tokens.next().ok_or_else(malformed)?;

    let mut segments = target.split(':');
    let file_path = segments.next().unwrap_or_default();
    let marker = segments.next().ok_or_else(malformed)?;
    if file_path.is_empty() || marker.is_empty() {
        return Err(malformed());
    }

    let options = tokens
        .filter_map(parse_option)
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

    Ok(DirectiveReference {
        file_path: file_path.to_owned(),
        marker: marker.to_owned(),
        options,
    })
}

/// Split a `key=value` token, or `None` if it is not exactly one pair.
fn parse_option(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    if key.is_empty() || value.contains('=') {
        return None;
    }
    Some((key, value))
}
