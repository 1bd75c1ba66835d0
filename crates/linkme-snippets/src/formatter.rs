//! Fenced code block rendering for snippet windows.

use crate::{RecognizedOptions, SnippetWindow};

/// Language tag used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "python";

/// Renders snippet windows as fenced markdown code blocks.
///
/// The language tag is fixed per formatter, not per directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFormatter {
    language: String,
}

impl Default for BlockFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl BlockFormatter {
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Language tag written on the opening fence.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Render the window, preceded by the heading line when one is set.
    ///
    /// The result always ends with exactly one line break.
    #[must_use]
    pub fn format(&self, window: &SnippetWindow, options: &RecognizedOptions) -> String {
        let body_len: usize = window.lines.iter().map(|line| line.len() + 1).sum();
        let mut out = String::with_capacity(body_len + self.language.len() + 16);

        if let Some(heading) = &options.heading {
            out.push_str(heading);
            out.push('\n');
        }

        out.push_str("```");
        out.push_str(&self.language);
        out.push('\n');
        out.push_str(&window.lines.join("\n"));
        out.push_str("\n```\n");

        out
    }
}
