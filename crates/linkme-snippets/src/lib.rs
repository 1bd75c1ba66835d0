//! Snippet directives for LinkMe documents.
//!
//! A document embeds source excerpts with a single-line directive:
//!
//! ```text
//! {! CODEBLOCK src/app.py:main( margin=2:4 heading=Entrypoint !}
//! ```
//!
//! Processing a document runs four stages for every directive line:
//!
//! 1. [`parse_directive`] turns the payload into a [`DirectiveReference`]
//!    (`path:marker` plus `key=value` options).
//! 2. [`RecognizedOptions`] extracts the `margin` and `heading` options.
//! 3. [`SnippetLocator`] reads the referenced file and cuts a
//!    [`SnippetWindow`] around the first line containing the marker.
//! 4. [`BlockFormatter`] renders the window as a fenced code block.
//!
//! [`DocumentProcessor`] drives the stages line by line and returns markdown
//! that is ready for a standard renderer.
//!
//! # Example
//!
//! ```
//! use linkme_snippets::{DocumentProcessor, ProcessorConfig};
//!
//! let config = ProcessorConfig::new("/project")
//!     .with_read_file(|_| Ok("x\nFOO bar\ny".to_owned()));
//! let processor = DocumentProcessor::new(config);
//!
//! let output = processor
//!     .process("{! CODEBLOCK src/a.py:FOO margin=1:1 heading=Example !}")
//!     .unwrap();
//! assert_eq!(output, "Example\n```python\nx\nFOO bar\ny\n```\n");
//! ```

mod error;
mod formatter;
mod locator;
mod options;
mod parser;
mod processor;

pub use error::{ProcessError, SnippetError};
pub use formatter::{BlockFormatter, DEFAULT_LANGUAGE};
pub use locator::{ReadFileFn, SnippetLocator, SnippetWindow, extract_window};
pub use options::{HEADING_OPTION, MARGIN_OPTION, Margin, RecognizedOptions};
pub use parser::{DirectiveReference, parse_directive};
pub use processor::{DocumentProcessor, ProcessorConfig, find_directive};
