//! Markdown to HTML rendering for LinkMe.
//!
//! Renders the markdown produced by `linkme-snippets` (directives already
//! replaced by fenced code blocks) into an HTML fragment with
//! [`pulldown_cmark`].
//!
//! # Example
//!
//! ```
//! use linkme_renderer::MarkdownRenderer;
//!
//! let result = MarkdownRenderer::new()
//!     .with_title_extraction()
//!     .render("# Guide\n\n```python\nprint(1)\n```\n");
//!
//! assert_eq!(result.title.as_deref(), Some("Guide"));
//! assert!(result.html.contains(r#"<code class="language-python">"#));
//! ```

mod renderer;

pub use renderer::{MarkdownRenderer, RenderResult};
