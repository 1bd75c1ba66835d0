//! Error types for directive processing.

use std::io;
use std::path::PathBuf;

/// Failure while resolving a single directive.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    /// The payload has no usable `path:marker` segment.
    #[error("malformed directive `{directive}`: expected `<path>:<marker>`")]
    MalformedDirective {
        /// Directive payload as written in the document.
        directive: String,
    },
    /// The referenced file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    FileNotFound {
        /// Resolved path of the referenced file.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No line of the referenced file contains the marker.
    #[error("marker `{marker}` not found in {}", .path.display())]
    MarkerNotFound {
        /// Marker that was searched for.
        marker: String,
        /// Resolved path of the referenced file.
        path: PathBuf,
    },
    /// A required option is absent.
    #[error("missing required option `{option}`")]
    MissingOption {
        /// Option name (e.g., `margin`).
        option: &'static str,
    },
    /// `margin` is not two colon-separated non-negative integers.
    #[error("invalid margin `{value}`: expected `<top>:<bottom>` with non-negative integers")]
    InvalidMargin {
        /// Raw option value.
        value: String,
    },
}

/// Failure while processing a whole document.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// A directive on the given line could not be resolved.
    #[error("line {line}: {source} (in `{directive}`)")]
    Directive {
        /// 1-based line number in the input document.
        line: usize,
        /// Full directive text, delimiters included.
        directive: String,
        #[source]
        source: SnippetError,
    },
}

impl ProcessError {
    /// The underlying directive error.
    #[must_use]
    pub fn snippet_error(&self) -> &SnippetError {
        match self {
            Self::Directive { source, .. } => source,
        }
    }

    /// Line number of the offending directive.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Directive { line, .. } => *line,
        }
    }
}
