//! Recognized directive options.

use std::fmt;
use std::str::FromStr;

use crate::{DirectiveReference, SnippetError};

/// Option key for the line window around the anchor.
pub const MARGIN_OPTION: &str = "margin";
/// Option key for the line placed before the code block.
pub const HEADING_OPTION: &str = "heading";

/// Number of lines to include above and below the anchor line.
///
/// # Example
///
/// ```
/// use linkme_snippets::Margin;
///
/// let margin: Margin = "2:1".parse().unwrap();
/// assert_eq!(margin, Margin::new(2, 1));
/// assert!("-1:2".parse::<Margin>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margin {
    /// Lines above the anchor.
    pub top: usize,
    /// Lines below the anchor.
    pub bottom: usize,
}

impl Margin {
    #[must_use]
    pub fn new(top: usize, bottom: usize) -> Self {
        Self { top, bottom }
    }
}

impl FromStr for Margin {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SnippetError::InvalidMargin {
            value: s.to_owned(),
        };

        let (top, bottom) = s.split_once(':').ok_or_else(invalid)?;
        let top = top.parse().map_err(|_| invalid())?;
        let bottom = bottom.parse().map_err(|_| invalid())?;

        Ok(Self { top, bottom })
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.top, self.bottom)
    }
}

/// Options with defined semantics, extracted from a [`DirectiveReference`].
///
/// Unrecognized keys stay in [`DirectiveReference::options`] and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedOptions {
    /// Required line window.
    pub margin: Margin,
    /// Optional heading line.
    pub heading: Option<String>,
}

impl RecognizedOptions {
    /// Extract recognized options from a parsed directive.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::MissingOption`] if `margin` is absent and
    /// [`SnippetError::InvalidMargin`] if it cannot be parsed.
    pub fn from_reference(reference: &DirectiveReference) -> Result<Self, SnippetError> {
        let margin = reference
            .get(MARGIN_OPTION)
            .ok_or(SnippetError::MissingOption {
                option: MARGIN_OPTION,
            })?
            .parse()?;

        Ok(Self {
            margin,
            heading: reference.get(HEADING_OPTION).map(str::to_owned),
        })
    }
}
